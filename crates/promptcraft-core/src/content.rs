//! Content types and tones offered by the generator.
//!
//! Every per-variant string (labels, tone descriptors, template fragments)
//! lives in one static table per enum, indexed by the variant. Adding a
//! variant means adding one table row.

use serde::{Deserialize, Serialize};

/// Category of text the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Social,
    Blog,
    Script,
    Ad,
    Email,
    Caption,
}

/// Stylistic register applied to generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
    Funny,
    Inspiring,
}

/// Template fragments attached to a content type.
///
/// `lead` prefixes the first body paragraph, `heading` the second, `scene`
/// the third, and `tags` is appended after the body.
#[derive(Debug)]
pub struct ContentTypeInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub lead: &'static str,
    pub heading: &'static str,
    pub scene: &'static str,
    pub tags: &'static str,
}

#[derive(Debug)]
pub struct ToneInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub descriptor: &'static str,
}

// Row order must match the enum discriminants.
static CONTENT_TYPES: [ContentTypeInfo; 6] = [
    ContentTypeInfo {
        value: "social",
        label: "Social Media Post",
        lead: "🌟 ",
        heading: "",
        scene: "",
        tags: "\n#ContentCreation #AI #Digital",
    },
    ContentTypeInfo {
        value: "blog",
        label: "Blog Article",
        lead: "",
        heading: "## Key Points\n\n",
        scene: "",
        tags: "",
    },
    ContentTypeInfo {
        value: "script",
        label: "Video Script",
        lead: "",
        heading: "",
        scene: "[Scene transitions smoothly]\n\n",
        tags: "",
    },
    ContentTypeInfo {
        value: "ad",
        label: "Ad Copy",
        lead: "",
        heading: "",
        scene: "",
        tags: "",
    },
    ContentTypeInfo {
        value: "email",
        label: "Email Copy",
        lead: "",
        heading: "",
        scene: "",
        tags: "",
    },
    ContentTypeInfo {
        value: "caption",
        label: "Instagram Caption",
        lead: "",
        heading: "",
        scene: "",
        tags: "",
    },
];

static TONES: [ToneInfo; 6] = [
    ToneInfo { value: "professional", label: "Professional", descriptor: "clear and authoritative" },
    ToneInfo { value: "casual", label: "Casual", descriptor: "relaxed and friendly" },
    ToneInfo { value: "friendly", label: "Friendly", descriptor: "warm and approachable" },
    ToneInfo { value: "formal", label: "Formal", descriptor: "sophisticated and polished" },
    ToneInfo { value: "funny", label: "Funny", descriptor: "witty and entertaining" },
    ToneInfo { value: "inspiring", label: "Inspiring", descriptor: "motivational and uplifting" },
];

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Social,
        ContentType::Blog,
        ContentType::Script,
        ContentType::Ad,
        ContentType::Email,
        ContentType::Caption,
    ];

    pub fn info(&self) -> &'static ContentTypeInfo {
        &CONTENT_TYPES[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        self.info().value
    }

    pub fn display_name(&self) -> &'static str {
        self.info().label
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Next variant in table order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(*self as usize + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(*self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Formal,
        Tone::Funny,
        Tone::Inspiring,
    ];

    pub fn info(&self) -> &'static ToneInfo {
        &TONES[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        self.info().value
    }

    pub fn display_name(&self) -> &'static str {
        self.info().label
    }

    pub fn descriptor(&self) -> &'static str {
        self.info().descriptor
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(*self as usize + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(*self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
