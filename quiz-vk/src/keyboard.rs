//! VK keyboard JSON for `messages.send`.

use quiz_core::{ButtonKind, Keyboard, KeyboardDirective};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VkKeyboard<'a> {
    one_time: bool,
    buttons: Vec<Vec<VkButton<'a>>>,
}

#[derive(Debug, Serialize)]
struct VkButton<'a> {
    action: VkAction<'a>,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct VkAction<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    label: &'a str,
}

fn color(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::NewQuestion => "positive",
        ButtonKind::End => "negative",
        ButtonKind::GiveUp => "primary",
    }
}

fn render(keyboard: &VkKeyboard<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string(keyboard)
}

/// Renders a core keyboard as a one-time VK keyboard.
pub fn keyboard_json(keyboard: &Keyboard) -> Result<String, serde_json::Error> {
    render(&VkKeyboard {
        one_time: true,
        buttons: keyboard
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| VkButton {
                        action: VkAction {
                            kind: "text",
                            label: &button.label,
                        },
                        color: color(button.kind),
                    })
                    .collect()
            })
            .collect(),
    })
}

/// Keyboard that removes the current one.
pub fn empty_keyboard_json() -> Result<String, serde_json::Error> {
    render(&VkKeyboard {
        one_time: true,
        buttons: Vec::new(),
    })
}

/// `keyboard` parameter for a reply, or None to leave the shown keyboard alone.
pub fn directive_json(directive: &KeyboardDirective) -> Result<Option<String>, serde_json::Error> {
    match directive {
        KeyboardDirective::Keep => Ok(None),
        KeyboardDirective::Show(keyboard) => keyboard_json(keyboard).map(Some),
        KeyboardDirective::Hide => empty_keyboard_json().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::QuizTexts;
    use serde_json::{json, Value};

    #[test]
    fn test_answering_keyboard_json() {
        let rendered = keyboard_json(&QuizTexts::default().answering_keyboard()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!({
                "one_time": true,
                "buttons": [
                    [{"action": {"type": "text", "label": "Новый вопрос"}, "color": "positive"}],
                    [
                        {"action": {"type": "text", "label": "Завершить"}, "color": "negative"},
                        {"action": {"type": "text", "label": "Сдаться"}, "color": "primary"}
                    ]
                ]
            })
        );
    }

    #[test]
    fn test_directive_json() {
        assert_eq!(directive_json(&KeyboardDirective::Keep).unwrap(), None);

        let hidden = directive_json(&KeyboardDirective::Hide).unwrap().unwrap();
        let value: Value = serde_json::from_str(&hidden).unwrap();
        assert_eq!(value, json!({"one_time": true, "buttons": []}));
    }
}
