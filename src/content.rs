// Copy and asset references rendered by the pages.

pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", id: "home" },
    NavItem { label: "Services", id: "services" },
    NavItem { label: "Pricing", id: "pricing" },
    NavItem { label: "What we do", id: "how-it-works" },
];

pub struct ProblemCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badges: &'static [&'static str],
}

pub static PROBLEM_CARDS: [ProblemCard; 4] = [
    ProblemCard {
        icon: "https://c.animaapp.com/mik17n6qd0VDsr/img/icon-container-2.svg",
        title: "The Bench Time Money Pit",
        description: "Every day a fresher spends \"learning the ropes\" is a day you pay a salary but can't bill the client.",
        badges: &["Idle Talent", "Planning", "Non-Billable Time"],
    },
    ProblemCard {
        icon: "https://c.animaapp.com/mik17n6qd0VDsr/img/icon-container-3.svg",
        title: "Senior Burnout",
        description: "Your Senior Devs spend 20% of their week explaining the same architecture diagrams and setting up the same env variables.",
        badges: &["Productivity Loss", "Mentor Overload"],
    },
    ProblemCard {
        icon: "https://c.animaapp.com/mik17n6qd0VDsr/img/icon-container-1.svg",
        title: "The \"Bus Factor\" Risk",
        description: "If your Lead Dev quits tomorrow, the mental map of your legacy codebase walks out the door with them.",
        badges: &["Critical Dependency", "Team Fragility"],
    },
    ProblemCard {
        icon: "https://c.animaapp.com/mik17n6qd0VDsr/img/icon-container.svg",
        title: "The \"Silent Failure\"",
        description: "Juniors read the docs, say \"I understand,\" and then crash production because they missed the unwritten rules.",
        badges: &["Unwritten Rules", "False Confidence"],
    },
];

pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static STEPS: [Step; 3] = [
    Step {
        icon: "/passive-imprint.gif",
        title: "The Passive Imprint",
        description: "Captures your Senior's code, logs, clicks, and the intent behind each decision.",
    },
    Step {
        icon: "/reasoning-engine.gif",
        title: "The Reasoning Engine",
        description: "We map causality, connecting actions to outcomes to capture tacit knowledge.",
    },
    Step {
        icon: "/active-simulation.gif",
        title: "The Active Simulation",
        description: "New hires train in a live simulation, with the AI correcting them.",
    },
];

pub enum Cell {
    Text(&'static str),
    Tick(&'static str),
    Cross(&'static str),
}

pub struct ComparisonRow {
    pub feature: &'static str,
    /// Loom / Video, Git / Github, Notion / Docs, Our Engine
    pub cells: [Cell; 4],
}

pub static COMPARISON_HEADERS: [&str; 5] = [
    "Features",
    "Loom / Video",
    "Git / Github",
    "Notion / Docs",
    "Our Engine",
];

pub static COMPARISON_ROWS: [ComparisonRow; 5] = [
    ComparisonRow {
        feature: "Experience",
        cells: [
            Cell::Text("Passive Watching"),
            Cell::Text("Static Reading"),
            Cell::Text("Static Reading"),
            Cell::Text("Active Simulation"),
        ],
    },
    ComparisonRow {
        feature: "Captures \"Why\"",
        cells: [
            Cell::Tick("If they say so"),
            Cell::Cross("Just the result"),
            Cell::Tick("If updated"),
            Cell::Tick("Linked to Action"),
        ],
    },
    ComparisonRow {
        feature: "Verifies Skill",
        cells: [
            Cell::Cross("Hope they watched"),
            Cell::Cross("Hope they read"),
            Cell::Cross(""),
            Cell::Tick("Auto-Verification"),
        ],
    },
    ComparisonRow {
        feature: "Maintenance",
        cells: [
            Cell::Cross("Re-record everything"),
            Cell::Tick(""),
            Cell::Cross("Instantly Stale"),
            Cell::Tick("Edit the Graph"),
        ],
    },
    ComparisonRow {
        feature: "Setup Time",
        cells: [
            Cell::Text("High (Editing/Upload)"),
            Cell::Text("N/A"),
            Cell::Text("High (Writing)"),
            Cell::Text("Zero (Just Work)"),
        ],
    },
];

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static FEATURE_CARDS: [FeatureCard; 2] = [
    FeatureCard {
        title: "Real-Time Event Correlation",
        description: "Syncs voice, code context, and browser actions in milliseconds to create a unified stream of every decision.",
        image: "https://c.animaapp.com/mik17n6qd0VDsr/img/text-container.png",
    },
    FeatureCard {
        title: "Pedagogical Knowledge Graph",
        description: "Maps all dependencies and prerequisites in your workflow, knowing what a developer must learn before the next step.",
        image: "https://c.animaapp.com/mik17n6qd0VDsr/img/text-container-1.png",
    },
];

pub static FOOTER_LINKS: [&str; 3] = ["Privacy Policy", "Terms and conditions", "Contact"];
