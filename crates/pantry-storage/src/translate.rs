//! Translation of `gs://` storage URIs into public HTTP URLs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unencoded by ECMAScript's `encodeURIComponent`.
/// Everything else is percent-encoded, `/` and space included.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const GS_SCHEME: &str = "gs://";
const PUBLIC_BASE: &str = "https://firebasestorage.googleapis.com/v0/b";

/// Convert a `gs://bucket/path` URI into a public download URL.
///
/// Anything that does not start with `gs://` is returned unchanged, so
/// plain HTTP URLs and empty strings pass through. The function never
/// fails; a malformed `gs://` URI produces a URL that will simply not
/// resolve.
pub fn translate_storage_uri(uri: &str) -> String {
    let Some(rest) = uri.strip_prefix(GS_SCHEME) else {
        return uri.to_string();
    };

    let (bucket, path) = match rest.split_once('/') {
        Some((bucket, path)) => (bucket, path),
        None => (rest, ""),
    };

    let encoded = utf8_percent_encode(path, COMPONENT);
    format!("{PUBLIC_BASE}/{bucket}/o/{encoded}?alt=media")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_gs_input_passes_through() {
        assert_eq!(
            translate_storage_uri("https://example.com/img.png"),
            "https://example.com/img.png"
        );
        assert_eq!(translate_storage_uri(""), "");
        assert_eq!(translate_storage_uri("not a uri at all"), "not a uri at all");
    }

    #[test]
    fn gs_uri_is_translated() {
        assert_eq!(
            translate_storage_uri("gs://my-bucket/recipes/photo.jpg"),
            "https://firebasestorage.googleapis.com/v0/b/my-bucket/o/recipes%2Fphoto.jpg?alt=media"
        );
    }

    #[test]
    fn path_separators_and_spaces_are_encoded() {
        assert_eq!(
            translate_storage_uri("gs://bucket/a/b c.png"),
            "https://firebasestorage.googleapis.com/v0/b/bucket/o/a%2Fb%20c.png?alt=media"
        );
    }

    #[test]
    fn unreserved_marks_stay_unencoded() {
        assert_eq!(
            translate_storage_uri("gs://b/a-b_c.d!e~f*g'h(i)j.png"),
            "https://firebasestorage.googleapis.com/v0/b/b/o/a-b_c.d!e~f*g'h(i)j.png?alt=media"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(
            translate_storage_uri("gs://b/a+b&c=d.png"),
            "https://firebasestorage.googleapis.com/v0/b/b/o/a%2Bb%26c%3Dd.png?alt=media"
        );
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        assert_eq!(
            translate_storage_uri("gs://b/caf\u{e9}.png"),
            "https://firebasestorage.googleapis.com/v0/b/b/o/caf%C3%A9.png?alt=media"
        );
    }

    #[test]
    fn bucket_without_path_never_panics() {
        assert_eq!(
            translate_storage_uri("gs://bucket"),
            "https://firebasestorage.googleapis.com/v0/b/bucket/o/?alt=media"
        );
        assert_eq!(
            translate_storage_uri("gs://"),
            "https://firebasestorage.googleapis.com/v0/b//o/?alt=media"
        );
    }

    #[test]
    fn translation_is_idempotent() {
        let once = translate_storage_uri("gs://bucket/dir/img.png");
        assert_eq!(translate_storage_uri(&once), once);
    }
}
