use nameplate_shared::{PhotoRef, ProfilePhoto, UserFullRecord, UserRecord};

fn present(photo: Option<&ProfilePhoto>) -> Option<&PhotoRef> {
    photo.and_then(ProfilePhoto::photo_ref)
}

/// True when the record carries a real avatar, not the empty marker.
pub fn has_photo(user: Option<&UserRecord>) -> bool {
    photo(user).is_some()
}

pub fn photo(user: Option<&UserRecord>) -> Option<&PhotoRef> {
    present(user?.photo.as_ref())
}

/// True when the full profile carries a real fallback photo.
pub fn has_fallback_photo(full: Option<&UserFullRecord>) -> bool {
    full.and_then(|f| present(f.fallback_photo.as_ref())).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo_ref() -> PhotoRef {
        PhotoRef {
            photo_id: 11,
            dc_id: 2,
            has_video: false,
        }
    }

    #[test]
    fn test_has_photo() {
        let mut user = UserRecord::new(1);
        assert!(!has_photo(None));
        assert!(!has_photo(Some(&user)));

        user.photo = Some(ProfilePhoto::Empty);
        assert!(!has_photo(Some(&user)));
        assert!(photo(Some(&user)).is_none());

        user.photo = Some(ProfilePhoto::Set(photo_ref()));
        assert!(has_photo(Some(&user)));
        assert_eq!(photo(Some(&user)), Some(&photo_ref()));
    }

    #[test]
    fn test_has_fallback_photo() {
        let mut full = UserFullRecord::default();
        assert!(!has_fallback_photo(None));
        assert!(!has_fallback_photo(Some(&full)));

        full.fallback_photo = Some(ProfilePhoto::Empty);
        assert!(!has_fallback_photo(Some(&full)));

        full.fallback_photo = Some(ProfilePhoto::Set(photo_ref()));
        assert!(has_fallback_photo(Some(&full)));
    }
}
