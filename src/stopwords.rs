use std::collections::HashSet;
use std::sync::LazyLock;

/// Common Russian function words excluded from counting.
pub const RUSSIAN: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "ж",
    "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь",
    "этом",
];

static BUILTIN: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RUSSIAN.iter().copied().collect());

/// The built-in stop-word set, built on first use.
pub fn builtin() -> &'static HashSet<&'static str> {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_no_duplicates() {
        assert_eq!(builtin().len(), RUSSIAN.len());
    }

    #[test]
    fn test_builtin_is_lowercase() {
        for word in RUSSIAN {
            assert_eq!(word.to_lowercase(), *word);
        }
    }

    #[test]
    fn test_membership() {
        let set = builtin();
        assert!(set.contains("и"));
        assert!(set.contains("потому"));
        assert!(!set.contains("python"));
    }
}
