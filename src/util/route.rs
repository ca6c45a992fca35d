use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// RFC 3986 unreserved characters stay verbatim in an encoded segment.
const ROUTE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Decode a percent-encoded route parameter once; after this point an encoded
/// id and its decoded form are equivalent. Non-UTF-8 input is used as-is.
pub fn decode_route_param(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn encode_route_param(raw: &str) -> String {
    utf8_percent_encode(raw, ROUTE_SEGMENT).to_string()
}

pub fn detail_route(machine_id: &str, event_id: &str) -> String {
    format!("/{}/tag/{}", encode_route_param(machine_id), event_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escaped_machine_ids() {
        assert_eq!(decode_route_param("CNC%2D01"), "CNC-01");
        assert_eq!(decode_route_param("MILL%20BAY%203"), "MILL BAY 3");
    }

    #[test]
    fn plain_ids_pass_through() {
        assert_eq!(decode_route_param("CNC-01"), "CNC-01");
        assert_eq!(decode_route_param(""), "");
    }

    #[test]
    fn malformed_escapes_are_kept_verbatim() {
        assert_eq!(decode_route_param("100%"), "100%");
        assert_eq!(decode_route_param("a%2"), "a%2");
    }

    #[test]
    fn encode_escapes_outside_the_unreserved_set() {
        assert_eq!(encode_route_param("MILL BAY 3"), "MILL%20BAY%203");
        assert_eq!(encode_route_param("CNC-01"), "CNC-01");
        assert_eq!(encode_route_param("a/b"), "a%2Fb");
    }

    #[test]
    fn encode_then_decode_round_trips() {
        for id in ["CNC-01", "MILL BAY 3", "line#2", "Ünit-7"] {
            assert_eq!(decode_route_param(&encode_route_param(id)), id);
        }
    }

    #[test]
    fn detail_route_shape() {
        assert_eq!(detail_route("CNC-01", "ev-101"), "/CNC-01/tag/ev-101");
        assert_eq!(
            detail_route("MILL BAY 3", "ev-102"),
            "/MILL%20BAY%203/tag/ev-102"
        );
    }
}
