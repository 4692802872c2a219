use gtk::gdk;
use gtk4 as gtk;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OpenLibrary,
    CapturePhoto,
    RecordVideo,
    AddText,
    Save,
    Discard,
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::OpenLibrary => "Open from Library",
            Action::CapturePhoto => "Capture Photo",
            Action::RecordVideo => "Record Video",
            Action::AddText => "Add Text to Image",
            Action::Save => "Save to Library",
            Action::Discard => "Discard Image",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct ShortcutConfig {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::OpenLibrary,
            Shortcut {
                key: gdk::Key::o,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::CapturePhoto,
            Shortcut {
                key: gdk::Key::p,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::RecordVideo,
            Shortcut {
                key: gdk::Key::r,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::AddText,
            Shortcut {
                key: gdk::Key::t,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::Save,
            Shortcut {
                key: gdk::Key::s,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::Discard,
            Shortcut {
                key: gdk::Key::Delete,
                modifiers: gdk::ModifierType::empty(),
            },
        );

        Self { bindings }
    }
}

impl ShortcutConfig {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out irrelevant modifiers like NumLock/CapsLock/ScrollLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;

        for (action, shortcut) in &self.bindings {
            if shortcut.key == key && shortcut.modifiers == clean_mods {
                return Some(*action);
            }

            // Handle keypad Delete as alias for Delete
            if *action == Action::Discard
                && key == gdk::Key::KP_Delete
                && shortcut.key == gdk::Key::Delete
                && shortcut.modifiers == clean_mods
            {
                return Some(*action);
            }
        }
        None
    }

    pub fn get_shortcut_label(&self, action: Action) -> String {
        if let Some(sc) = self.bindings.get(&action) {
            return gtk::accelerator_name(sc.key, sc.modifiers).to_string();
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_resolve() {
        let config = ShortcutConfig::default();
        assert_eq!(
            config.get_action(gdk::Key::s, gdk::ModifierType::CONTROL_MASK),
            Some(Action::Save)
        );
        assert_eq!(
            config.get_action(gdk::Key::Delete, gdk::ModifierType::empty()),
            Some(Action::Discard)
        );
    }

    #[test]
    fn test_lock_modifiers_are_ignored() {
        let config = ShortcutConfig::default();
        let mods = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::LOCK_MASK;
        assert_eq!(config.get_action(gdk::Key::o, mods), Some(Action::OpenLibrary));
    }

    #[test]
    fn test_keypad_delete_alias() {
        let config = ShortcutConfig::default();
        assert_eq!(
            config.get_action(gdk::Key::KP_Delete, gdk::ModifierType::empty()),
            Some(Action::Discard)
        );
    }

    #[test]
    fn test_unbound_key_is_none() {
        let config = ShortcutConfig::default();
        assert_eq!(config.get_action(gdk::Key::q, gdk::ModifierType::empty()), None);
    }
}
