//! Theme color resolution.
//!
//! Each attribute is resolved in the same order: the override chain, then
//! the value embedded in the record (only when its flag is set), then a
//! fixed default. The defaults differ per attribute:
//!
//! | attribute          | default          |
//! |--------------------|------------------|
//! | `color_id`         | `id mod 7`       |
//! | `emoji_id`         | `0`              |
//! | `profile_color_id` | `-1`             |
//! | `profile_emoji_id` | `0`              |

use nameplate_shared::constants::{COLOR_BUCKETS, NO_EMOJI, NO_PROFILE_COLOR};
use nameplate_shared::UserRecord;

use crate::resolver::AttributeResolver;

/// Stable color bucket derived from the user id alone.
pub fn bucketed_color_id(id: i64) -> i32 {
    // Always in 0..COLOR_BUCKETS, so the cast cannot truncate.
    id.rem_euclid(COLOR_BUCKETS) as i32
}

impl AttributeResolver {
    /// Name color index. `0` for a missing record.
    pub fn color_id(&self, user: Option<&UserRecord>) -> i32 {
        let Some(user) = user else {
            return 0;
        };
        self.overrides
            .first_opinion(user, "color_id", |p, u| p.color_id(u))
            .or_else(|| user.color.and_then(|c| c.color_index()))
            .unwrap_or_else(|| bucketed_color_id(user.id))
    }

    /// Background emoji for the name color, `0` if none.
    pub fn emoji_id(&self, user: Option<&UserRecord>) -> i64 {
        let Some(user) = user else {
            return NO_EMOJI;
        };
        self.overrides
            .first_opinion(user, "emoji_id", |p, u| p.emoji_id(u))
            .or_else(|| user.color.and_then(|c| c.emoji_id()))
            .unwrap_or(NO_EMOJI)
    }

    /// Profile color index, `-1` when no profile color is configured.
    pub fn profile_color_id(&self, user: Option<&UserRecord>) -> i32 {
        let Some(user) = user else {
            return NO_PROFILE_COLOR;
        };
        self.overrides
            .first_opinion(user, "profile_color_id", |p, u| p.profile_color_id(u))
            .or_else(|| user.profile_color.and_then(|c| c.color_index()))
            .unwrap_or(NO_PROFILE_COLOR)
    }

    /// Profile background emoji, `0` if none.
    pub fn profile_emoji_id(&self, user: Option<&UserRecord>) -> i64 {
        let Some(user) = user else {
            return NO_EMOJI;
        };
        self.overrides
            .first_opinion(user, "profile_emoji_id", |p, u| p.profile_emoji_id(u))
            .or_else(|| user.profile_color.and_then(|c| c.emoji_id()))
            .unwrap_or(NO_EMOJI)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::overrides::{OverrideProvider, StaticOverrides, ThemeOverride};
    use nameplate_shared::PeerColor;
    use rand::Rng;

    /// Provider stub that answers every field with fixed values and counts
    /// how often it was asked.
    struct Recording {
        answer: ThemeOverride,
        calls: AtomicUsize,
    }

    impl Recording {
        fn new(answer: ThemeOverride) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl OverrideProvider for Recording {
        fn label(&self) -> &str {
            "recording"
        }

        fn color_id(&self, _: &UserRecord) -> Option<i32> {
            self.hit();
            self.answer.color_id
        }

        fn emoji_id(&self, _: &UserRecord) -> Option<i64> {
            self.hit();
            self.answer.emoji_id
        }

        fn profile_color_id(&self, _: &UserRecord) -> Option<i32> {
            self.hit();
            self.answer.profile_color_id
        }

        fn profile_emoji_id(&self, _: &UserRecord) -> Option<i64> {
            self.hit();
            self.answer.profile_emoji_id
        }
    }

    fn everything(color: i32, emoji: i64) -> ThemeOverride {
        ThemeOverride {
            color_id: Some(color),
            emoji_id: Some(emoji),
            profile_color_id: Some(color),
            profile_emoji_id: Some(emoji),
        }
    }

    fn resolver(local: Arc<Recording>, remote: Arc<Recording>) -> AttributeResolver {
        AttributeResolver::builder().providers(local, remote).build()
    }

    #[test]
    fn test_defaults_without_configuration() {
        let resolver = AttributeResolver::default();
        let user = UserRecord::new(17);
        assert_eq!(resolver.color_id(Some(&user)), 3);
        assert_eq!(resolver.emoji_id(Some(&user)), 0);
        assert_eq!(resolver.profile_color_id(Some(&user)), -1);
        assert_eq!(resolver.profile_emoji_id(Some(&user)), 0);
    }

    #[test]
    fn test_missing_record_defaults() {
        let local = Recording::new(everything(1, 1));
        let remote = Recording::new(everything(2, 2));
        let resolver = resolver(local.clone(), remote.clone());

        assert_eq!(resolver.color_id(None), 0);
        assert_eq!(resolver.emoji_id(None), 0);
        assert_eq!(resolver.profile_color_id(None), -1);
        assert_eq!(resolver.profile_emoji_id(None), 0);
        assert_eq!(local.calls() + remote.calls(), 0);
    }

    #[test]
    fn test_local_short_circuits_remote() {
        let local = Recording::new(everything(5, 500));
        let remote = Recording::new(everything(6, 600));
        let resolver = resolver(local.clone(), remote.clone());
        let user = UserRecord {
            color: Some(PeerColor::with_color(1)),
            ..UserRecord::new(17)
        };

        assert_eq!(resolver.color_id(Some(&user)), 5);
        assert_eq!(resolver.emoji_id(Some(&user)), 500);
        assert_eq!(resolver.profile_color_id(Some(&user)), 5);
        assert_eq!(resolver.profile_emoji_id(Some(&user)), 500);
        assert_eq!(local.calls(), 4);
        assert_eq!(remote.calls(), 0);
    }

    #[test]
    fn test_remote_beats_embedded() {
        let local = Recording::new(ThemeOverride::default());
        let remote = Recording::new(everything(6, 600));
        let resolver = resolver(local.clone(), remote.clone());
        let user = UserRecord {
            color: Some(PeerColor {
                has_color: true,
                color: 1,
                has_emoji: true,
                background_emoji_id: 100,
            }),
            ..UserRecord::new(17)
        };

        assert_eq!(resolver.color_id(Some(&user)), 6);
        assert_eq!(resolver.emoji_id(Some(&user)), 600);
        assert_eq!(local.calls(), 2);
        assert_eq!(remote.calls(), 2);
    }

    #[test]
    fn test_provider_zero_overrides_embedded() {
        let local = Recording::new(everything(0, 0));
        let remote = Recording::new(ThemeOverride::default());
        let resolver = resolver(local, remote.clone());
        let user = UserRecord {
            color: Some(PeerColor::with_color(4)),
            profile_color: Some(PeerColor::with_color(4)),
            ..UserRecord::new(17)
        };

        assert_eq!(resolver.color_id(Some(&user)), 0);
        assert_eq!(resolver.profile_color_id(Some(&user)), 0);
        assert_eq!(remote.calls(), 0);
    }

    #[test]
    fn test_embedded_values_need_their_flag() {
        let resolver = AttributeResolver::default();
        let flagged = UserRecord {
            color: Some(PeerColor {
                has_color: true,
                color: 6,
                has_emoji: true,
                background_emoji_id: 321,
            }),
            profile_color: Some(PeerColor {
                has_color: true,
                color: 2,
                has_emoji: true,
                background_emoji_id: 654,
            }),
            ..UserRecord::new(17)
        };
        assert_eq!(resolver.color_id(Some(&flagged)), 6);
        assert_eq!(resolver.emoji_id(Some(&flagged)), 321);
        assert_eq!(resolver.profile_color_id(Some(&flagged)), 2);
        assert_eq!(resolver.profile_emoji_id(Some(&flagged)), 654);

        let unflagged = UserRecord {
            color: Some(PeerColor {
                has_color: false,
                color: 6,
                has_emoji: false,
                background_emoji_id: 321,
            }),
            profile_color: Some(PeerColor {
                has_color: false,
                color: 2,
                has_emoji: false,
                background_emoji_id: 654,
            }),
            ..UserRecord::new(17)
        };
        assert_eq!(resolver.color_id(Some(&unflagged)), 3);
        assert_eq!(resolver.emoji_id(Some(&unflagged)), 0);
        assert_eq!(resolver.profile_color_id(Some(&unflagged)), -1);
        assert_eq!(resolver.profile_emoji_id(Some(&unflagged)), 0);
    }

    #[test]
    fn test_profile_color_ignores_name_color() {
        let resolver = AttributeResolver::default();
        let user = UserRecord {
            color: Some(PeerColor::with_color(5)),
            ..UserRecord::new(17)
        };
        assert_eq!(resolver.profile_color_id(Some(&user)), -1);
    }

    #[test]
    fn test_static_overrides_in_chain() {
        let local = StaticOverrides::new("local").with(
            17,
            ThemeOverride {
                profile_color_id: Some(8),
                ..ThemeOverride::default()
            },
        );
        let resolver = AttributeResolver::builder()
            .providers(Arc::new(local), Arc::new(StaticOverrides::new("remote")))
            .build();
        let user = UserRecord::new(17);
        assert_eq!(resolver.profile_color_id(Some(&user)), 8);
        assert_eq!(resolver.color_id(Some(&user)), 3);
    }

    #[test]
    fn test_bucketed_color_is_stable_and_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let id: i64 = rng.gen();
            let bucket = bucketed_color_id(id);
            assert!((0..7).contains(&bucket));
            assert_eq!(bucket, bucketed_color_id(id));
            if id >= 0 {
                assert_eq!(i64::from(bucket), id % 7);
            }
        }
    }
}
