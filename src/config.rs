
pub const PILOT_BOOKINGS_TABLE: &str = "pilot_bookings";

#[cfg(debug_assertions)]
pub fn supabase_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // local supabase stack
    }
}

#[cfg(not(debug_assertions))]
pub fn supabase_url() -> &'static str {
    // Same-origin proxy unless baked in at build time
    option_env!("SUPABASE_URL").unwrap_or("")
}

pub fn supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}
