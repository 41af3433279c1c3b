use crate::components::icons::Icon;

// Content records rendered by the page sections. Every section ships
// hard-coded defaults in its own file and accepts replacements through
// props; an override replaces the whole field value, nested records are
// never merged.

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub title: String,
    pub url: String,
    pub sub_menu_links: Vec<NavLink>,
}

impl NavLink {
    pub fn leaf(title: &str, url: &str) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            sub_menu_links: Vec::new(),
        }
    }

    pub fn parent(title: &str, url: &str, sub_menu_links: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            sub_menu_links,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct LogoSpec {
    pub prefix: String,
    pub accent: String,
    pub url: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Link,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Default,
    Sm,
    Link,
}

#[derive(Clone, PartialEq)]
pub struct ButtonSpec {
    pub title: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub url: Option<String>,
}

impl ButtonSpec {
    pub fn primary(title: &str) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Default,
            url: None,
        }
    }

    pub fn secondary(title: &str) -> Self {
        Self {
            variant: ButtonVariant::Secondary,
            ..Self::primary(title)
        }
    }

    pub fn link(title: &str) -> Self {
        Self {
            variant: ButtonVariant::Link,
            size: ButtonSize::Link,
            ..Self::primary(title)
        }
    }

    pub fn small(mut self) -> Self {
        self.size = ButtonSize::Sm;
        self
    }

    pub fn to_url(mut self, url: &str) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[derive(Clone, PartialEq)]
pub struct ImageSpec {
    pub src: String,
    pub alt: String,
}

impl ImageSpec {
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct LinkSpec {
    pub label: String,
    pub url: String,
}

impl LinkSpec {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct FeatureCard {
    pub icon: Option<Icon>,
    pub image: Option<ImageSpec>,
    pub tagline: Option<String>,
    pub heading: String,
    pub description: String,
    pub button: ButtonSpec,
}

#[derive(Clone, PartialEq)]
pub struct PropertyCard {
    pub tagline: String,
    pub image: ImageSpec,
    pub heading: String,
    pub description: String,
    pub features: Vec<String>,
    pub button: ButtonSpec,
}

#[derive(Clone, PartialEq)]
pub struct AmenitySection {
    pub tagline: String,
    pub heading: String,
    pub description: String,
    pub buttons: Vec<ButtonSpec>,
    pub image: ImageSpec,
}

#[derive(Clone, PartialEq)]
pub struct ContactSpec {
    pub icon: Icon,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<LinkSpec>,
    pub button: Option<ButtonSpec>,
}

#[derive(Clone, PartialEq)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<LinkSpec>,
}

#[derive(Clone, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub url: String,
}
