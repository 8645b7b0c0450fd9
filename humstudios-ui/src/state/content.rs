//! Marketing copy
//!
//! Static copy of the public site, with each element group bound to its
//! entrance motion.

use super::reveal::Motion;

/// A card in a marketing section
#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
    pub motion: Motion,
}

/// A section revealed as one unit when it scrolls into view
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Anchor id
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub heading_motion: Motion,
    pub cards: &'static [FeatureCard],
}

pub const STUDIO_NAME: &str = "Hum Studios";

pub const HERO_HEADING: &str = "Software and games, crafted with care";

pub const HERO_TAGLINE: &str =
    "Hum Studios designs and builds digital products from first sketch to launch.";

const WHY_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Innovation",
        body: "At Hum Studios, we strive to push the boundaries of creativity with every \
               project, offering innovative solutions that redefine the digital experience.",
        motion: Motion::slide(-50, 1000),
    },
    FeatureCard {
        title: "Expertise",
        body: "Our team is composed of experienced developers and designers who specialize \
               in both software and game development, ensuring top-quality products that \
               meet the highest standards.",
        motion: Motion::slide(50, 1000),
    },
    FeatureCard {
        title: "Collaboration",
        body: "We value our partnerships and work closely with our clients to understand \
               their vision, ensuring that the final product perfectly aligns with their \
               expectations and goals.",
        motion: Motion::slide(-50, 1000),
    },
];

/// "Why Choose Hum Studios?"
pub const WHY_CHOOSE_US: Section = Section {
    id: "why-choose-us",
    heading: "Why Choose Hum Studios?",
    tagline: "We bring solutions",
    heading_motion: Motion::rise(50, 600),
    cards: &WHY_CARDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_why_section_motions() {
        let section = WHY_CHOOSE_US;
        assert_eq!(section.heading_motion.duration_ms, 600);
        assert_eq!(section.heading_motion.initial.y, 50);

        let offsets: Vec<i32> = section.cards.iter().map(|c| c.motion.initial.x).collect();
        assert_eq!(offsets, vec![-50, 50, -50]);
        assert!(section.cards.iter().all(|c| c.motion.duration_ms == 1000));
    }

    #[test]
    fn test_why_section_cards() {
        let titles: Vec<_> = WHY_CHOOSE_US.cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Innovation", "Expertise", "Collaboration"]);
    }
}
