//! Canned chat prompts offered as one-click clipboard shortcuts.

/// A phrase the assistant understands, with what it asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub phrase: &'static str,
    pub description: &'static str,
}

/// The phrases are pasted into the chat verbatim, so they stay in the
/// assistant's language.
pub const KEYWORDS: &[Keyword] = &[
    Keyword {
        phrase: "статистика",
        description: "Summary statistics for the selected table",
    },
    Keyword {
        phrase: "рекомендации",
        description: "Recommendations for managing liquidity",
    },
    Keyword {
        phrase: "что если",
        description: "What-if scenario analysis",
    },
    Keyword {
        phrase: "рост курса",
        description: "Impact of an exchange-rate rise",
    },
    Keyword {
        phrase: "задержка платежа",
        description: "Impact of a delayed payment",
    },
    Keyword {
        phrase: "графика закупок",
        description: "Purchase schedule planning",
    },
];
