//! Initials avatar for the signed-in user.

use dioxus::prelude::*;

/// Uppercase initials of each whitespace-separated word, "?" when empty.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

#[component]
pub fn UserAvatar(name: String, #[props(default = 40)] size: u32) -> Element {
    let letters = initials(&name);
    rsx! {
        span {
            class: "user-avatar",
            style: "width: {size}px; height: {size}px; font-size: {size / 2}px;",
            title: "{name}",
            "{letters}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("ada"), "A");
    }

    #[test]
    fn empty_name_is_a_question_mark() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }
}
