//! Pure encode/decode between a [`FormState`] and the `data` query parameter
//! of a session link. Decoding is deliberately lossy on failure: a corrupt or
//! stale link degrades to a blank sheet instead of surfacing an error.

use crate::schema::FormState;

/// Serialize the field mapping to JSON and percent-encode it for use as a
/// single query-parameter value.
pub fn encode(state: &FormState) -> String {
    let json = serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string());
    urlencoding::encode(&json).into_owned()
}

/// The full `data=<encoded>` query pair for `state`.
pub fn encode_query(state: &FormState) -> String {
    format!("data={}", encode(state))
}

/// Decode a full link, a `?`-prefixed query, or a bare query string back into
/// a [`FormState`]. A missing `data` parameter, a bad percent-escape, or
/// unparseable JSON all yield an empty mapping.
pub fn decode(link: &str) -> FormState {
    let query = match link.split_once('?') {
        Some((_, q)) => q,
        None => link,
    };

    for pair in query.split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if name != "data" {
            continue;
        }
        let Ok(json) = urlencoding::decode(value) else {
            return FormState::default();
        };
        return serde_json::from_str(&json).unwrap_or_default();
    }

    FormState::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKey;

    #[test]
    fn round_trip_through_query() {
        let state: FormState = [
            (FieldKey::Name, "Jane Doe".to_string()),
            (FieldKey::Age, "30".to_string()),
            (FieldKey::Notes, "two\nlines & a \"quote\"".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(decode(&encode_query(&state)), state);
    }

    #[test]
    fn round_trip_through_full_link() {
        let state = FormState::single(FieldKey::Zip, "60601");
        let link = format!("https://example.org/spc?{}", encode_query(&state));
        assert_eq!(decode(&link), state);
    }

    #[test]
    fn encoded_value_has_no_raw_json_punctuation() {
        let state = FormState::single(FieldKey::Name, "Jane Doe");
        let encoded = encode(&state);
        assert!(!encoded.contains('{'));
        assert!(!encoded.contains('"'));
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn missing_or_empty_input_decodes_to_empty() {
        assert!(decode("").is_empty());
        assert!(decode("?").is_empty());
        assert!(decode("other=1&more=2").is_empty());
        assert!(decode("https://example.org/spc").is_empty());
    }

    #[test]
    fn malformed_data_decodes_to_empty() {
        // Not JSON at all.
        assert!(decode("data=hello").is_empty());
        // Valid JSON, wrong shape.
        assert!(decode("data=%5B1%2C2%5D").is_empty());
        // Truncated percent-escape.
        assert!(decode("data=%7").is_empty());
        // Unknown field name.
        assert!(decode("data=%7B%22bogus%22%3A%22x%22%7D").is_empty());
    }

    #[test]
    fn decodes_preencoded_age_link() {
        // ?data={"age":"30"} as a browser would have encoded it.
        let state = decode("?data=%7B%22age%22%3A%2230%22%7D");
        assert_eq!(state.get(FieldKey::Age), Some("30"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn explicitly_cleared_field_survives_the_link() {
        let mut state = FormState::single(FieldKey::Gender, "M");
        state.merge(FormState::single(FieldKey::Gender, ""));
        let decoded = decode(&encode_query(&state));
        assert_eq!(decoded.get(FieldKey::Gender), Some(""));
    }
}
