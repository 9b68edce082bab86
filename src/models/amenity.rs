use serde::{Deserialize, Serialize};

/// Amenities a study space may offer. Also used as "must have" filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Amenity {
    Outlets,
    Accessible,
    Quiet,
    Private,
    Media,
}

impl Amenity {
    pub const ALL: [Amenity; 5] = [
        Amenity::Outlets,
        Amenity::Accessible,
        Amenity::Quiet,
        Amenity::Private,
        Amenity::Media,
    ];

    /// Key used in the JSON `filters` object and as DB column name.
    pub fn key(&self) -> &'static str {
        match self {
            Amenity::Outlets => "outlets",
            Amenity::Accessible => "accessible",
            Amenity::Quiet => "quiet",
            Amenity::Private => "private",
            Amenity::Media => "media",
        }
    }

    /// Column header used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Outlets => "Outlets",
            Amenity::Accessible => "Accessible",
            Amenity::Quiet => "Quiet",
            Amenity::Private => "Private",
            Amenity::Media => "Media",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s.trim()))
    }
}

/// Amenity flags of a space, serialized as the `filters` object.
///
/// The same shape doubles as a filter set: a `true` flag means
/// "must have", a `false` flag imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    #[serde(default)]
    pub outlets: bool,
    #[serde(default)]
    pub accessible: bool,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub media: bool,
}

impl Amenities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Outlets => self.outlets,
            Amenity::Accessible => self.accessible,
            Amenity::Quiet => self.quiet,
            Amenity::Private => self.private,
            Amenity::Media => self.media,
        }
    }

    pub fn set(&mut self, amenity: Amenity, value: bool) {
        match amenity {
            Amenity::Outlets => self.outlets = value,
            Amenity::Accessible => self.accessible = value,
            Amenity::Quiet => self.quiet = value,
            Amenity::Private => self.private = value,
            Amenity::Media => self.media = value,
        }
    }

    pub fn with(mut self, amenity: Amenity) -> Self {
        self.set(amenity, true);
        self
    }

    /// Amenities flagged `true`, in display order.
    pub fn enabled(&self) -> Vec<Amenity> {
        Amenity::ALL.into_iter().filter(|a| self.has(*a)).collect()
    }

    /// Interprets `self` as required filters: every required amenity must be
    /// present in `offered`. Unrequired amenities never exclude.
    pub fn admits(&self, offered: &Amenities) -> bool {
        Amenity::ALL
            .into_iter()
            .all(|a| !self.has(a) || offered.has(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirements_admit_everything() {
        let req = Amenities::none();
        assert!(req.admits(&Amenities::none()));
        assert!(req.admits(&Amenities::none().with(Amenity::Media)));
    }

    #[test]
    fn required_amenity_must_be_offered() {
        let req = Amenities::none().with(Amenity::Quiet);
        assert!(!req.admits(&Amenities::none().with(Amenity::Outlets)));
        assert!(req.admits(&Amenities::none().with(Amenity::Quiet).with(Amenity::Outlets)));
    }

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!(Amenity::from_key("Private"), Some(Amenity::Private));
        assert_eq!(Amenity::from_key("wifi"), None);
    }
}
