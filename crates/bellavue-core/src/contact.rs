// Contact bundle captured alongside an event draft, plus the pure
// composition helpers used by the linkage coordinator.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Contact fields collected when an event is created without a pre-existing
/// customer. All fields are free text; blanks are allowed everywhere except
/// that the composed display name must be non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub street_and_number: String,
    pub zip_and_city: String,
    pub notes: String,
}

impl ContactInfo {
    /// Composed display name, e.g. "Anna Müller".
    pub fn display_name(&self) -> String {
        compose_display_name(&self.first_name, &self.last_name)
    }

    /// Composed display address, e.g. "Seeweg 2, 80331 München".
    pub fn display_address(&self) -> String {
        compose_address(&self.street_and_number, &self.zip_and_city)
    }
}

/// Compose a display name from first/last name parts. Blank sides are
/// omitted; the result is trimmed and may be empty.
pub fn compose_display_name(first_name: &str, last_name: &str) -> String {
    [first_name.trim(), last_name.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose a single display address from the street and zip/city parts,
/// omitting either side if blank.
///
/// Callers that already hold a non-blank composed address keep it instead of
/// recomposing, so a manually curated address is never regressed to an
/// auto-concatenated string.
pub fn compose_address(street_and_number: &str, zip_and_city: &str) -> String {
    [street_and_number.trim(), zip_and_city.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_both_sides() {
        assert_eq!(
            compose_address("Seeweg 2", "80331 München"),
            "Seeweg 2, 80331 München"
        );
    }

    #[test]
    fn omits_blank_sides() {
        assert_eq!(compose_address("Main St 1", ""), "Main St 1");
        assert_eq!(compose_address("  ", "12345 Town"), "12345 Town");
        assert_eq!(compose_address("", ""), "");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            compose_address("  Main St 1 ", " 12345 Town "),
            "Main St 1, 12345 Town"
        );
    }

    #[test]
    fn recomposing_same_parts_is_stable() {
        // Feeding an already-composed address back through with the same
        // parts must not concatenate further.
        let composed = compose_address("Main St 1", "12345 Town");
        assert_eq!(composed, "Main St 1, 12345 Town");
        assert_eq!(compose_address(&composed, ""), composed);
    }

    #[test]
    fn display_name_skips_missing_parts() {
        assert_eq!(compose_display_name("Anna", "Müller"), "Anna Müller");
        assert_eq!(compose_display_name("", "Müller"), "Müller");
        assert_eq!(compose_display_name("Anna", ""), "Anna");
        assert_eq!(compose_display_name(" ", " "), "");
    }

    #[test]
    fn contact_info_composition() {
        let contact = ContactInfo {
            first_name: "Anna".into(),
            last_name: "Müller".into(),
            street_and_number: "Seeweg 2".into(),
            zip_and_city: "80331 München".into(),
            ..ContactInfo::default()
        };
        assert_eq!(contact.display_name(), "Anna Müller");
        assert_eq!(contact.display_address(), "Seeweg 2, 80331 München");
    }
}
