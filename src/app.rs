mod nav;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_json_ld, IDENTITY};
use crate::theme::Theme;

pub use portfolio::PortfolioView;

const DEVICON_CSS: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";
const FONTS_CSS: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" href=FONTS_CSS />
                <link rel="stylesheet" href=DEVICON_CSS />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Theme::default());

    view! {
        <Title text=format!("{} - {}", IDENTITY.name, IDENTITY.role) />
        <Meta name="description" content=format!("Portfolio of {}", IDENTITY.name) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioView />
            </Routes>
        </Router>
    }
}
