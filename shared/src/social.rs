use serde::{Serialize, Deserialize};

pub const EMPTY_LINK_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Linkedin,
    Instagram,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Instagram,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Instagram => "instagram",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "https://twitter.com/yourusername",
            SocialPlatform::Linkedin => "https://linkedin.com/in/yourusername",
            SocialPlatform::Instagram => "https://instagram.com/yourusername",
        }
    }
}

/// Social profile URLs shown in the footer. Values are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub platform: SocialPlatform,
    pub label: &'static str,
    pub href: String,
}

impl SocialLinks {
    pub fn new(twitter: impl Into<String>, linkedin: impl Into<String>, instagram: impl Into<String>) -> Self {
        Self {
            twitter: twitter.into(),
            linkedin: linkedin.into(),
            instagram: instagram.into(),
        }
    }

    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Instagram => &self.instagram,
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, value: impl Into<String>) {
        match platform {
            SocialPlatform::Twitter => self.twitter = value.into(),
            SocialPlatform::Linkedin => self.linkedin = value.into(),
            SocialPlatform::Instagram => self.instagram = value.into(),
        }
    }

    pub fn href(&self, platform: SocialPlatform) -> &str {
        match self.get(platform) {
            "" => EMPTY_LINK_HREF,
            url => url,
        }
    }

    pub fn footer_links(&self) -> Vec<FooterLink> {
        SocialPlatform::ALL.iter()
            .map(|&platform| FooterLink {
                platform,
                label: platform.label(),
                href: self.href(platform).to_string(),
            })
            .collect()
    }
}
