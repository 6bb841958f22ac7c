//! Ordered classifications
//!
//! Every classification family (risk level, alert severity, shipment status,
//! ...) is declared once, with a stable wire value per member and an optional
//! display label. Severity-like families also carry a rank, and all ordering
//! goes through it: never declaration order, never the wire string.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::classification::{Classification, RiskLevel, escalate};
//!
//! let level = RiskLevel::parse("HIGH").unwrap();
//! assert_eq!(level, RiskLevel::High);
//! assert!(RiskLevel::Critical > level);
//! assert_eq!(escalate(level, RiskLevel::Medium), RiskLevel::High);
//! assert!(RiskLevel::parse("SEVERE").is_err());
//! ```

use std::fmt;

use crate::error::ClassificationError;

/// A closed family of named values with stable wire representations.
pub trait Classification: Copy + Eq + fmt::Debug + 'static {
    /// Family name used in error messages.
    const FAMILY: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Machine-readable value. Stable across releases; external consumers persist it.
    fn wire_value(self) -> &'static str;

    fn display_label(self) -> Option<&'static str>;

    /// Display label, or the wire value for members without one.
    fn label(self) -> &'static str {
        self.display_label().unwrap_or(self.wire_value())
    }

    /// Looks up a member by exact wire value.
    fn parse(wire_value: &str) -> Result<Self, ClassificationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.wire_value() == wire_value)
            .ok_or_else(|| ClassificationError::UnknownClassificationValue {
                family: Self::FAMILY,
                value: wire_value.to_string(),
            })
    }
}

/// A classification with a total order given by rank.
///
/// `a.rank() < b.rank()` means `a` is less severe than `b`. Ranks are unique
/// and contiguous from 1 within a family.
pub trait Ranked: Classification + Ord {
    fn rank(self) -> u8;

    fn is_at_least(self, threshold: Self) -> bool {
        self.rank() >= threshold.rank()
    }
}

/// Returns the more severe of two values.
pub fn escalate<T: Ranked>(current: T, incoming: T) -> T {
    if incoming.rank() > current.rank() {
        incoming
    } else {
        current
    }
}

/// Returns the most severe value, or `None` for an empty input.
pub fn highest<T, I>(values: I) -> Option<T>
where
    T: Ranked,
    I: IntoIterator<Item = T>,
{
    values.into_iter().max_by_key(|v| v.rank())
}

/// Declares a classification enum and its trait, `Display`, `FromStr`
/// and (with the `serde` feature) wire-value serde impls.
macro_rules! classification {
    (@label) => { None };
    (@label $label:literal) => { Some($label) };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $family:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal $(($label:literal))?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::classification::Classification for $name {
            const FAMILY: &'static str = $family;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn wire_value(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            fn display_label(self) -> Option<&'static str> {
                match self {
                    $($name::$variant => classification!(@label $($label)?),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::classification::Classification::wire_value(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ClassificationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::classification::Classification>::parse(s)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::classification::Classification::wire_value(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let wire = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::classification::Classification>::parse(&wire)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Like `classification!`, plus a rank per member and an `Ord` built on it.
macro_rules! ranked_classification {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $family:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal $(($label:literal))? rank $rank:literal
            ),+ $(,)?
        }
    ) => {
        classification! {
            $(#[$meta])*
            $vis enum $name in $family {
                $(
                    $(#[$vmeta])*
                    $variant = $wire $(($label))?
                ),+
            }
        }

        impl $crate::classification::Ranked for $name {
            fn rank(self) -> u8 {
                match self {
                    $($name::$variant => $rank,)+
                }
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                use $crate::classification::Ranked;
                self.rank().cmp(&other.rank())
            }
        }
    };
}

mod families;

pub use families::{AlertSeverity, RiskLevel, ShipmentStatus, SupplierStatus, UserRole};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<T: Classification>() {
        for &member in T::ALL {
            assert_eq!(T::parse(member.wire_value()), Ok(member));
        }
    }

    fn assert_contiguous_ranks<T: Ranked>() {
        let ranks: Vec<u8> = T::ALL.iter().map(|m| m.rank()).collect();
        let expected: Vec<u8> = (1..=T::ALL.len() as u8).collect();
        assert_eq!(ranks, expected, "{} ranks", T::FAMILY);
    }

    #[test]
    fn test_every_family_round_trips() {
        assert_round_trip::<RiskLevel>();
        assert_round_trip::<AlertSeverity>();
        assert_round_trip::<ShipmentStatus>();
        assert_round_trip::<SupplierStatus>();
        assert_round_trip::<UserRole>();
    }

    #[test]
    fn test_ranks_are_contiguous_in_escalation_order() {
        assert_contiguous_ranks::<RiskLevel>();
        assert_contiguous_ranks::<AlertSeverity>();
    }

    #[test]
    fn test_parse_known_value() {
        assert_eq!(RiskLevel::parse("HIGH"), Ok(RiskLevel::High));
        assert_eq!("IN_TRANSIT".parse::<ShipmentStatus>(), Ok(ShipmentStatus::InTransit));
    }

    #[test]
    fn test_parse_unknown_value() {
        assert_eq!(
            RiskLevel::parse("SEVERE"),
            Err(ClassificationError::UnknownClassificationValue {
                family: "risk level",
                value: "SEVERE".to_string(),
            })
        );
        // Wire values are exact.
        assert!(RiskLevel::parse("high").is_err());
        assert!(RiskLevel::parse("High").is_err());
    }

    #[test]
    fn test_ordering_follows_rank() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert!(AlertSeverity::Info < AlertSeverity::Critical);
        assert!(AlertSeverity::Error.is_at_least(AlertSeverity::Warning));
        assert!(!AlertSeverity::Info.is_at_least(AlertSeverity::Warning));
    }

    #[test]
    fn test_escalate_and_highest() {
        assert_eq!(escalate(RiskLevel::Low, RiskLevel::High), RiskLevel::High);
        assert_eq!(escalate(RiskLevel::Critical, RiskLevel::High), RiskLevel::Critical);
        assert_eq!(
            highest([RiskLevel::Medium, RiskLevel::Critical, RiskLevel::Low]),
            Some(RiskLevel::Critical)
        );
        assert_eq!(highest(Vec::<AlertSeverity>::new()), None);
    }

    #[test]
    fn test_display_is_wire_value() {
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
        assert_eq!(SupplierStatus::UnderReview.to_string(), "UNDER_REVIEW");
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::Medium.display_label(), Some("Medium"));
        assert_eq!(ShipmentStatus::InTransit.label(), "In Transit");
        assert_eq!(AlertSeverity::Warning.display_label(), None);
        assert_eq!(AlertSeverity::Warning.label(), "WARNING");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
        let level: RiskLevel = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(level, RiskLevel::Critical);
        let err = serde_json::from_str::<RiskLevel>("\"SEVERE\"").unwrap_err();
        assert!(err.to_string().contains("SEVERE"));
    }
}
