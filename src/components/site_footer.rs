use yew::prelude::*;

use crate::content::FOOTER_LINKS;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <div class="site-footer">
            <div class="footer-logos">
                <img class="footer-logo" alt="Jataka" src="/jatakalogo.svg" />
                <span class="footer-by">{"by"}</span>
                <img class="footer-logo small" alt="Shodh AI" src="/shodhlogo.svg" />
            </div>
            <div class="footer-links">
                { for FOOTER_LINKS.iter().map(|link| html! {
                    <a href="#">{ *link }</a>
                }) }
            </div>
        </div>
    }
}
