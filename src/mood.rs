use rand::{Rng, seq::IndexedRandom};

pub const FALLBACK: &str = "Thank you for sharing your feelings.";

pub const COPING_NOTICE: &str = "Coping Strategies: Take a break, try some deep breathing exercises, and focus on one task at a time.";

/// Mood keywords that have their own affirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Excited,
        Mood::Stressed,
    ];

    /// Case-insensitive match against the keyword set.
    pub fn from_keyword(mood: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.keyword().eq_ignore_ascii_case(mood))
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Stressed => "stressed",
        }
    }

    pub const fn affirmations(self) -> &'static [&'static str; 3] {
        match self {
            Mood::Happy => &[
                "Keep up the great work!",
                "Happiness is contagious, spread it around!",
                "You are a beacon of joy!",
            ],
            Mood::Sad => &[
                "It's okay to feel sad sometimes.",
                "Take one step at a time.",
                "You are stronger than you think.",
            ],
            Mood::Angry => &[
                "Take a deep breath and relax.",
                "Try to channel your anger into something productive.",
                "It's okay to feel angry, just don't let it control you.",
            ],
            Mood::Anxious => &[
                "Focus on what you can control.",
                "Take deep breaths to calm your mind.",
                "Everything will be okay.",
            ],
            Mood::Excited => &[
                "Enjoy the moment!",
                "Share your excitement with others!",
                "Keep the positive energy flowing!",
            ],
            Mood::Stressed => &[
                "Take a break and relax.",
                "Try some deep breathing exercises.",
                "Focus on one task at a time.",
            ],
        }
    }
}

/// Source of the random draw behind an affirmation.
pub trait Dice {
    fn pick(&mut self, options: &[&'static str]) -> Option<&'static str>;
}

impl<R: Rng + ?Sized> Dice for R {
    fn pick(&mut self, options: &[&'static str]) -> Option<&'static str> {
        options.choose(self).copied()
    }
}

pub fn affirmation_for(mood: &str, dice: &mut impl Dice) -> &'static str {
    Mood::from_keyword(mood)
        .and_then(|mood| dice.pick(mood.affirmations()))
        .unwrap_or(FALLBACK)
}

pub fn coping_notice(mood: &str) -> Option<&'static str> {
    (Mood::from_keyword(mood) == Some(Mood::Stressed)).then_some(COPING_NOTICE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Always takes the option at a fixed index.
    struct Loaded(usize);

    impl Dice for Loaded {
        fn pick(&mut self, options: &[&'static str]) -> Option<&'static str> {
            options.get(self.0).copied()
        }
    }

    #[test]
    fn keyword_match_ignores_case() {
        for spelling in ["Happy", "HAPPY", "happy"] {
            assert_eq!(Mood::from_keyword(spelling), Some(Mood::Happy));

            let mut rng = rand::rng();
            let said = affirmation_for(spelling, &mut rng);
            assert!(Mood::Happy.affirmations().contains(&said), "{said}");
        }
    }

    #[test]
    fn unmatched_moods_get_fallback() {
        let mut dice = Loaded(0);

        assert_eq!(affirmation_for("Other", &mut dice), FALLBACK);
        assert_eq!(affirmation_for("unknown", &mut dice), FALLBACK);
        assert_eq!(affirmation_for("", &mut dice), FALLBACK);
    }

    #[test]
    fn dice_chooses_within_table() {
        for (index, expected) in Mood::Stressed.affirmations().iter().enumerate() {
            assert_eq!(affirmation_for("stressed", &mut Loaded(index)), *expected);
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..8).map(|_| affirmation_for("Sad", &mut rng)).collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..8).map(|_| affirmation_for("Sad", &mut rng)).collect()
        };

        assert_eq!(first, second);
        assert!(first.iter().all(|said| Mood::Sad.affirmations().contains(said)));
    }

    #[test]
    fn every_mood_has_three_distinct_affirmations() {
        for mood in Mood::ALL {
            let options = mood.affirmations();
            assert!(options.iter().all(|said| !said.is_empty()));
            assert_ne!(options[0], options[1]);
            assert_ne!(options[1], options[2]);
            assert_ne!(options[0], options[2]);
        }
    }

    #[test]
    fn only_stressed_gets_coping_notice() {
        assert_eq!(coping_notice("Stressed"), Some(COPING_NOTICE));
        assert_eq!(coping_notice("STRESSED"), Some(COPING_NOTICE));

        for mood in ["Happy", "Sad", "Angry", "Anxious", "Excited", "Other", "stress"] {
            assert_eq!(coping_notice(mood), None, "{mood}");
        }
    }
}
