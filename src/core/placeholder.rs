/// Stock portraits shown when a user has not uploaded a photo
pub const PLACEHOLDER_PHOTOS: &[&str] = &[
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400&h=500&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=500&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=500&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=500&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&h=500&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=500&fit=crop&crop=face",
];

/// Pick a placeholder for `user_id`; the same id always gets the same photo
pub fn placeholder_photo(user_id: Option<&str>) -> &'static str {
    match user_id.filter(|id| !id.is_empty()) {
        None => PLACEHOLDER_PHOTOS[0],
        Some(id) => {
            // UTF-16 code units, to match the ids the web client hashes
            let sum: u64 = id.encode_utf16().map(u64::from).sum();
            PLACEHOLDER_PHOTOS[(sum % PLACEHOLDER_PHOTOS.len() as u64) as usize]
        }
    }
}

/// The user's own photo, or their placeholder
pub fn photo_or_placeholder(photo_url: Option<&str>, user_id: Option<&str>) -> String {
    match photo_url.filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => placeholder_photo(user_id).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_uses_first() {
        assert_eq!(placeholder_photo(None), PLACEHOLDER_PHOTOS[0]);
        assert_eq!(placeholder_photo(Some("")), PLACEHOLDER_PHOTOS[0]);
    }

    #[test]
    fn test_placeholder_is_stable() {
        // 'a' + 'b' = 97 + 98 = 195, 195 % 6 = 3
        assert_eq!(placeholder_photo(Some("ab")), PLACEHOLDER_PHOTOS[3]);
        assert_eq!(placeholder_photo(Some("ab")), placeholder_photo(Some("ab")));
    }

    #[test]
    fn test_own_photo_wins() {
        assert_eq!(photo_or_placeholder(Some("https://x/y.jpg"), Some("ab")), "https://x/y.jpg");
        assert_eq!(photo_or_placeholder(Some(""), Some("ab")), PLACEHOLDER_PHOTOS[3]);
    }
}
