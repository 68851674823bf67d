//! Static menus: products with their quick-start templates, IDEs, editors.

use std::fmt;

/// One line of a numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub key: &'static str,
    pub label: &'static str,
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.key, self.label)
    }
}

/// A parsed menu answer. Keys outside the menu are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Copy> MenuChoice<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            MenuChoice::Known(value) => Some(*value),
            MenuChoice::Unrecognized(_) => None,
        }
    }
}

/// Menu answers are compared after trimming and lowercasing.
fn normalize_key(input: &str) -> String {
    input.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    VenueLightning,
    VenueVisualforce,
    Encore,
}

impl Product {
    pub const ALL: [Product; 3] = [
        Product::VenueLightning,
        Product::VenueVisualforce,
        Product::Encore,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Product::VenueLightning => "1",
            Product::VenueVisualforce => "2",
            Product::Encore => "3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Product::VenueLightning => "Venue Lightning",
            Product::VenueVisualforce => "Venue Visualforce",
            Product::Encore => "Encore",
        }
    }

    fn menu_label(self) -> &'static str {
        match self {
            Product::VenueVisualforce => "Venue Visualforce (E-Commerce Order)",
            other => other.name(),
        }
    }

    /// Path of the quick-start repository on the template host.
    pub fn repository(self) -> &'static str {
        match self {
            Product::VenueLightning | Product::VenueVisualforce => {
                "/kineticgrowth/venue-quickstart.git"
            }
            Product::Encore => "/kineticgrowth/encore-quickstart.git",
        }
    }

    pub fn menu() -> Vec<MenuOption> {
        Self::ALL
            .iter()
            .map(|p| MenuOption {
                key: p.key(),
                label: p.menu_label(),
            })
            .collect()
    }

    pub fn parse(input: &str) -> MenuChoice<Product> {
        let key = normalize_key(input);
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .map_or(MenuChoice::Unrecognized(input.to_string()), MenuChoice::Known)
    }
}

/// Template locator for a raw product menu answer, `None` for keys outside the menu.
pub fn repository_for(input: &str) -> Option<&'static str> {
    Product::parse(input).known().map(Product::repository)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ide {
    Mavensmate,
    ForceIde,
    DeveloperConsole,
    Other,
}

impl Ide {
    pub const ALL: [Ide; 4] = [Ide::Mavensmate, Ide::ForceIde, Ide::DeveloperConsole, Ide::Other];

    pub fn key(self) -> &'static str {
        match self {
            Ide::Mavensmate => "1",
            Ide::ForceIde => "2",
            Ide::DeveloperConsole => "3",
            Ide::Other => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Ide::Mavensmate => "Mavensmate",
            Ide::ForceIde => "Force.com IDE",
            Ide::DeveloperConsole => "Developer Console",
            Ide::Other => "Other",
        }
    }

    pub fn menu() -> Vec<MenuOption> {
        Self::ALL
            .iter()
            .map(|i| MenuOption {
                key: i.key(),
                label: i.label(),
            })
            .collect()
    }

    pub fn parse(input: &str) -> MenuChoice<Ide> {
        let key = normalize_key(input);
        Self::ALL
            .into_iter()
            .find(|i| i.key() == key)
            .map_or(MenuChoice::Unrecognized(input.to_string()), MenuChoice::Known)
    }
}

/// How an IDE answer should be presented back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    Info(&'static str),
    Warning(&'static str),
}

const GENERIC_IDE_GUIDANCE: &str =
    "Please follow the directions for your specific IDE to connect this project to Salesforce.";

pub fn ide_guidance(choice: &MenuChoice<Ide>) -> Guidance {
    match choice.known() {
        Some(Ide::Mavensmate) => Guidance::Info(
            "Please open your project in Sublime Text, right click on your project root folder \
             and select \"Mavensmate\" > \"Create Mavensmate Project\" to convert the directory \
             to a Mavensmate project.\nExisting Directory conversion is not currently supported in Atom.",
        ),
        Some(Ide::ForceIde) => {
            Guidance::Info("No additional setup is needed to use this project in the Force.com IDE.")
        }
        Some(Ide::DeveloperConsole) => Guidance::Warning(
            "Using the Developer Console is highly discouraged as this tool provides no way to \
             download code and commit changes to git.",
        ),
        Some(Ide::Other) | None => Guidance::Info(GENERIC_IDE_GUIDANCE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    Sublime,
    Atom,
    Other,
}

impl Editor {
    pub const ALL: [Editor; 3] = [Editor::Sublime, Editor::Atom, Editor::Other];

    pub fn key(self) -> &'static str {
        match self {
            Editor::Sublime => "1",
            Editor::Atom => "2",
            Editor::Other => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Editor::Sublime => "Sublime",
            Editor::Atom => "Atom",
            Editor::Other => "Other",
        }
    }

    /// Command that opens a directory in this editor, if it ships one.
    pub fn launch_command(self) -> Option<&'static str> {
        match self {
            Editor::Atom => Some("atom"),
            Editor::Sublime | Editor::Other => None,
        }
    }

    pub fn menu() -> Vec<MenuOption> {
        Self::ALL
            .iter()
            .map(|e| MenuOption {
                key: e.key(),
                label: e.label(),
            })
            .collect()
    }

    pub fn parse(input: &str) -> MenuChoice<Editor> {
        let key = normalize_key(input);
        Self::ALL
            .into_iter()
            .find(|e| e.key() == key)
            .map_or(MenuChoice::Unrecognized(input.to_string()), MenuChoice::Known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some("/kineticgrowth/venue-quickstart.git"))]
    #[case("2", Some("/kineticgrowth/venue-quickstart.git"))]
    #[case("3", Some("/kineticgrowth/encore-quickstart.git"))]
    #[case(" 3 ", Some("/kineticgrowth/encore-quickstart.git"))]
    #[case("4", None)]
    #[case("0", None)]
    #[case("", None)]
    #[case("Encore", None)]
    fn test_repository_lookup(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(repository_for(input), expected);
    }

    #[rstest]
    #[case("1", Product::VenueLightning)]
    #[case("2", Product::VenueVisualforce)]
    #[case("3", Product::Encore)]
    fn test_product_keys(#[case] input: &str, #[case] expected: Product) {
        assert_eq!(Product::parse(input), MenuChoice::Known(expected));
    }

    #[test]
    fn test_unrecognized_product_keeps_raw_input() {
        assert_eq!(
            Product::parse("seven"),
            MenuChoice::Unrecognized("seven".to_string())
        );
    }

    #[test]
    fn test_product_menu_labels() {
        let labels: Vec<String> = Product::menu().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "1) Venue Lightning",
                "2) Venue Visualforce (E-Commerce Order)",
                "3) Encore",
            ]
        );
    }

    #[rstest]
    #[case("1", MenuChoice::Known(Ide::Mavensmate))]
    #[case("4", MenuChoice::Known(Ide::Other))]
    #[case("9", MenuChoice::Unrecognized("9".to_string()))]
    fn test_ide_parse(#[case] input: &str, #[case] expected: MenuChoice<Ide>) {
        assert_eq!(Ide::parse(input), expected);
    }

    #[test]
    fn test_developer_console_is_a_warning() {
        let guidance = ide_guidance(&MenuChoice::Known(Ide::DeveloperConsole));
        assert!(matches!(guidance, Guidance::Warning(text) if text.contains("discouraged")));
    }

    #[test]
    fn test_unrecognized_ide_gets_generic_guidance() {
        assert_eq!(
            ide_guidance(&MenuChoice::Unrecognized("x".into())),
            ide_guidance(&MenuChoice::Known(Ide::Other))
        );
    }

    #[test]
    fn test_only_atom_has_launch_command() {
        assert_eq!(Editor::Atom.launch_command(), Some("atom"));
        assert_eq!(Editor::Sublime.launch_command(), None);
        assert_eq!(Editor::Other.launch_command(), None);
        assert_eq!(Editor::parse("2"), MenuChoice::Known(Editor::Atom));
    }
}
