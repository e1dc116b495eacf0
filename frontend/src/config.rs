/// Parameters the embedding site provides to the landing page.
pub struct Config {
    pub brand_name: &'static str,
    pub contact_email: &'static str,
    pub logo_src: &'static str,
    pub show_testimonials: bool,
    pub twitter_url: &'static str,
    pub linkedin_url: &'static str,
    pub instagram_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            brand_name: "Maartand",
            contact_email: "contact@maartand.ai",
            logo_src: "",
            show_testimonials: false,
            twitter_url: "",
            linkedin_url: "",
            instagram_url: "",
        }
    }
}

pub const CONFIG: Config = Config::new();
