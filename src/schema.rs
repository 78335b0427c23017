use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed field schema of the intake half-sheet. Keys serialize to the
/// camelCase names carried inside a share link, so links stay wire-compatible
/// across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    Age,
    Gender,
    SexualOrientation,
    Zip,
    Race,
    ServedInMilitary,
    MilitaryFamily,
    HowDidYouHear,
    Thoughts,
    HarmToday,
    Plan,
    Means,
    Timeline,
    SriStart,
    PriorThoughts,
    PriorAttempts,
    Intoxicated,
    Gun,
    Diagnosis,
    Prescription,
    Homicidal,
    SriEnd,
    Notes,
    SafetyPlan,
}

/// The full form contents: field key to raw text. Absent means "unset";
/// present-but-empty means the user explicitly cleared the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState(BTreeMap<FieldKey, String>);

impl FormState {
    pub fn single(key: FieldKey, value: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key, value.into());
        Self(map)
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Display form of a field: unset and cleared both read as "".
    pub fn value_of(&self, key: FieldKey) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Shallow key-by-key merge; values in `partial` overwrite, including
    /// overwriting with an empty string.
    pub fn merge(&mut self, partial: FormState) {
        self.0.extend(partial.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(FieldKey, String)> for FormState {
    fn from_iter<I: IntoIterator<Item = (FieldKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A quick-fill button: `title` is the long label shown in help, `value` is
/// the short code written into the field when toggled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutOption {
    pub title: &'static str,
    pub value: &'static str,
}

const fn opt(title: &'static str, value: &'static str) -> ShortcutOption {
    ShortcutOption { title, value }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub label: &'static str,
    pub key: FieldKey,
    pub shortcuts: &'static [ShortcutOption],
    pub suggestions: &'static [&'static str],
    pub multiline: bool,
}

const fn field(label: &'static str, key: FieldKey) -> FieldDef {
    FieldDef {
        label,
        key,
        shortcuts: &[],
        suggestions: &[],
        multiline: false,
    }
}

const YES_NO: &[ShortcutOption] = &[opt("Yes", "Y"), opt("No", "N")];
const SRI_SCALE: &[ShortcutOption] = &[
    opt("1", "1"),
    opt("2", "2"),
    opt("3", "3"),
    opt("4", "4"),
    opt("5", "5"),
];

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: Option<&'static str>,
    pub fields: &'static [FieldDef],
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: Some("Demographics"),
        fields: &[
            FieldDef {
                shortcuts: &[opt("John Doe", "M"), opt("Jane Doe", "F")],
                ..field("Name", FieldKey::Name)
            },
            field("Age", FieldKey::Age),
            FieldDef {
                shortcuts: &[opt("Male", "M"), opt("Female", "F")],
                ..field("Gender", FieldKey::Gender)
            },
            FieldDef {
                shortcuts: &[
                    opt("Straight", "S"),
                    opt("Gay", "G"),
                    opt("Lesbian", "L"),
                    opt("Bisexual", "B"),
                ],
                suggestions: &[
                    "Straight",
                    "Gay",
                    "Lesbian",
                    "Bisexual",
                    "Other",
                    "Unknown",
                    "Decline to answer",
                ],
                ..field("Sexual Orientation", FieldKey::SexualOrientation)
            },
            field("Zip", FieldKey::Zip),
            FieldDef {
                shortcuts: &[
                    opt("Black", "B"),
                    opt("Asian", "A"),
                    opt("White", "W"),
                    opt("Latino", "L"),
                ],
                suggestions: &[
                    "African American/Black",
                    "Asian",
                    "Caucasian/White",
                    "Hispanic/Latino",
                    "Native American / Alaska Native +",
                    "Native Hawaiian / Other Pacific Islander",
                    "Two or more of above",
                    "Other",
                    "Decline to answer",
                    "Did not ask",
                ],
                ..field("Race", FieldKey::Race)
            },
            FieldDef {
                shortcuts: &[opt("No", "N")],
                suggestions: &[
                    "Yes - I am currently on Active Duty",
                    "Yes - I am in National Guard/Reserves but not currently activated",
                    "Yes - I have previously served in the US military",
                    "No - I have not served in the US military",
                    "Decline to answer",
                    "Did not ask",
                ],
                ..field("Served in Military", FieldKey::ServedInMilitary)
            },
            FieldDef {
                shortcuts: YES_NO,
                suggestions: &[
                    "Yes - A family member serves/has served in the US military",
                    "No - A family member has not served in the US military",
                    "Decline to answer",
                    "Did not ask",
                ],
                ..field("Military Family", FieldKey::MilitaryFamily)
            },
            FieldDef {
                suggestions: &[
                    "Agency",
                    "Hotline",
                    "Bus/Train Ads/Billboards",
                    "Community Event",
                    "DDH Website",
                    "Disaster Relief Organization",
                    "Friend/Relative",
                    "Health/Mental Health Professional",
                    "Internet Search",
                    "Repeat Caller",
                    "School",
                    "Social Media",
                    "Media - excluding social media",
                    "Warm/Cold Transfer",
                    "Unknown",
                    "Other",
                    "Did not ask",
                    "Decline to answer",
                ],
                ..field("How did you find our number?", FieldKey::HowDidYouHear)
            },
        ],
    },
    Section {
        title: Some("Risk Assessment"),
        fields: &[
            FieldDef {
                shortcuts: YES_NO,
                ..field("Thoughts", FieldKey::Thoughts)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Harm Today", FieldKey::HarmToday)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Plan", FieldKey::Plan)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Means", FieldKey::Means)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Timeline", FieldKey::Timeline)
            },
            FieldDef {
                shortcuts: SRI_SCALE,
                ..field("SRI Start", FieldKey::SriStart)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Prior Thoughts", FieldKey::PriorThoughts)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Prior Attempts", FieldKey::PriorAttempts)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Intoxicated", FieldKey::Intoxicated)
            },
            FieldDef {
                shortcuts: YES_NO,
                ..field("Gun", FieldKey::Gun)
            },
            field("Diagnosis (Dx)", FieldKey::Diagnosis),
            field("Prescription (Rx)", FieldKey::Prescription),
            FieldDef {
                shortcuts: YES_NO,
                ..field("Homicidal", FieldKey::Homicidal)
            },
            FieldDef {
                shortcuts: SRI_SCALE,
                ..field("SRI End", FieldKey::SriEnd)
            },
        ],
    },
    Section {
        title: None,
        fields: &[
            FieldDef {
                multiline: true,
                ..field("Notes", FieldKey::Notes)
            },
            field("Safety Plan", FieldKey::SafetyPlan),
        ],
    },
];

/// All field rows in page order.
pub fn field_defs() -> impl Iterator<Item = &'static FieldDef> {
    SECTIONS.iter().flat_map(|s| s.fields.iter())
}

pub fn field_count() -> usize {
    SECTIONS.iter().map(|s| s.fields.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn schema_keys_are_unique() {
        let mut seen = HashSet::new();
        for def in field_defs() {
            assert!(seen.insert(def.key), "duplicate key {:?}", def.key);
        }
        assert_eq!(seen.len(), field_count());
        assert_eq!(field_count(), 25);
    }

    #[test]
    fn keys_serialize_to_camel_case() {
        assert_eq!(
            serde_json::to_string(&FieldKey::SexualOrientation).unwrap(),
            "\"sexualOrientation\""
        );
        assert_eq!(serde_json::to_string(&FieldKey::SriStart).unwrap(), "\"sriStart\"");
        assert_eq!(serde_json::to_string(&FieldKey::Age).unwrap(), "\"age\"");
    }

    #[test]
    fn state_serializes_as_plain_object() {
        let state = FormState::single(FieldKey::Age, "30");
        assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"age":"30"}"#);
    }

    #[test]
    fn merge_overwrites_including_empty() {
        let mut state = FormState::single(FieldKey::Name, "Jane Doe");
        state.merge(FormState::single(FieldKey::Age, "30"));
        assert_eq!(state.get(FieldKey::Name), Some("Jane Doe"));
        assert_eq!(state.get(FieldKey::Age), Some("30"));

        state.merge(FormState::single(FieldKey::Name, ""));
        // Cleared is present-but-empty, not absent.
        assert_eq!(state.get(FieldKey::Name), Some(""));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn notes_is_the_only_multiline_row() {
        let multiline: Vec<_> = field_defs().filter(|d| d.multiline).collect();
        assert_eq!(multiline.len(), 1);
        assert_eq!(multiline[0].key, FieldKey::Notes);
    }
}
