//! Banner theme selection

/// Background gradient for a card banner
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerTheme {
    /// Red fading to black
    Crimson,
    /// Zinc through dark red to black
    Smoke,
    /// Black rising to red
    Ember,
}

impl BannerTheme {
    pub const ALL: [BannerTheme; 3] = [BannerTheme::Crimson, BannerTheme::Smoke, BannerTheme::Ember];

    /// Pick a theme from the name's length in UTF-16 code units, the length a
    /// browser reports. Same name, same theme; names of equal length always
    /// share one.
    pub fn for_name(name: &str) -> Self {
        Self::ALL[name.encode_utf16().count() % Self::ALL.len()]
    }

    pub fn gradient_class(self) -> &'static str {
        match self {
            BannerTheme::Crimson => "from-red-900 via-zinc-900 to-black",
            BannerTheme::Smoke => "from-zinc-900 via-red-950 to-black",
            BannerTheme::Ember => "from-black via-zinc-900 to-red-900",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_selects_variant() {
        assert_eq!(BannerTheme::for_name("abc"), BannerTheme::Crimson);
        assert_eq!(BannerTheme::for_name("abcd"), BannerTheme::Smoke);
        assert_eq!(BannerTheme::for_name("abcde"), BannerTheme::Ember);
        assert_eq!(BannerTheme::for_name(""), BannerTheme::Crimson);
    }

    #[test]
    fn test_equal_length_names_share_theme() {
        assert_eq!(BannerTheme::for_name("Orbit"), BannerTheme::for_name("Pulse"));
        assert_eq!(BannerTheme::for_name("Orbit"), BannerTheme::for_name("Orbit"));
    }

    #[test]
    fn test_counts_utf16_units() {
        // 3 chars, but the rocket is a surrogate pair: 4 units
        assert_eq!(BannerTheme::for_name("🚀ab"), BannerTheme::Smoke);
        // 4 chars, 5 bytes, 4 units
        assert_eq!(BannerTheme::for_name("café"), BannerTheme::Smoke);
    }

    #[test]
    fn test_gradients_are_distinct() {
        let classes: Vec<_> = BannerTheme::ALL.iter().map(|t| t.gradient_class()).collect();
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }
}
