use std::fmt::Display;

// framework a dimension belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Hofstede,
    Globe,
    Both,
}

impl Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Hofstede => "Hofstede",
            Self::Globe => "GLOBE",
            Self::Both => "Both",
        };

        write!(f, "{tag}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub name: &'static str,
    pub taxonomy: Taxonomy,
    pub description: &'static str,
}

pub const DIMENSIONS: [Dimension; 11] = [
    Dimension {
        name: "Power Distance",
        taxonomy: Taxonomy::Both,
        description: "The extent to which less powerful members accept unequal power distribution.",
    },
    Dimension {
        name: "Individualism vs. Collectivism",
        taxonomy: Taxonomy::Both,
        description: "The degree to which people are integrated into groups.",
    },
    Dimension {
        name: "Masculinity vs. Femininity",
        taxonomy: Taxonomy::Hofstede,
        description: "The distribution of values between genders.",
    },
    Dimension {
        name: "Uncertainty Avoidance",
        taxonomy: Taxonomy::Both,
        description: "Society's tolerance for uncertainty and ambiguity.",
    },
    Dimension {
        name: "Long-Term vs. Short-Term Orientation",
        taxonomy: Taxonomy::Hofstede,
        description: "The extent to which a society maintains links with its past.",
    },
    Dimension {
        name: "Indulgence vs. Restraint",
        taxonomy: Taxonomy::Hofstede,
        description: "The extent to which people try to control their desires and impulses.",
    },
    Dimension {
        name: "Performance Orientation",
        taxonomy: Taxonomy::Globe,
        description: "The degree to which a society encourages and rewards performance improvement and excellence.",
    },
    Dimension {
        name: "Assertiveness",
        taxonomy: Taxonomy::Globe,
        description: "The degree to which individuals are assertive, confrontational, and aggressive in social relationships.",
    },
    Dimension {
        name: "Future Orientation",
        taxonomy: Taxonomy::Globe,
        description: "The extent to which individuals engage in future-oriented behaviors.",
    },
    Dimension {
        name: "Humane Orientation",
        taxonomy: Taxonomy::Globe,
        description: "The degree to which a society encourages and rewards individuals for being fair, altruistic, and kind to others.",
    },
    Dimension {
        name: "Gender Egalitarianism",
        taxonomy: Taxonomy::Globe,
        description: "The degree to which a society minimizes gender inequality.",
    },
];

pub const COUNTRIES: [&str; 10] = [
    "United States",
    "Japan",
    "Germany",
    "China",
    "Brazil",
    "India",
    "Russia",
    "France",
    "Mexico",
    "South Africa",
];
