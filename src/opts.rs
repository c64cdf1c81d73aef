#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum NoiseLevel {
    Polite,
    LoudAndProud,
    FranklyQuitePedantic,
}

impl Default for NoiseLevel {
    fn default() -> Self {
        Self::Polite
    }
}

impl NoiseLevel {
    pub fn from_occurrences(occurrences: u64) -> Self {
        match occurrences {
            0 => Self::Polite,
            1 => Self::LoudAndProud,
            _ => Self::FranklyQuitePedantic,
        }
    }

    pub fn polite(self) -> bool {
        matches!(self, Self::Polite)
    }

    /// Any `-v` at all, which is also what gets `npm` to be chatty.
    pub fn verbose(self) -> bool {
        !self.polite()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest(occurrences, level, verbose,
        case(0, NoiseLevel::Polite, false),
        case(1, NoiseLevel::LoudAndProud, true),
        case(2, NoiseLevel::FranklyQuitePedantic, true),
        case(7, NoiseLevel::FranklyQuitePedantic, true),
    )]
    fn test_from_occurrences(occurrences: u64, level: NoiseLevel, verbose: bool) {
        let parsed = NoiseLevel::from_occurrences(occurrences);
        assert_eq!(parsed, level);
        assert_eq!(parsed.verbose(), verbose);
    }
}
