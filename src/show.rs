//! Show value type: a named performance with raw start/end times.

use qtty::{Quantity, Unit};

use crate::interval::{Interval, IntervalError};
use crate::Id;

/// A time-bounded performance requiring a stage.
///
/// Times are stored raw rather than as a validated [`Interval`] so that
/// malformed input (start >= end, NaN times) stays representable; the stage
/// assigner rejects it with an error instead of the constructor panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Show<U: Unit> {
    name: Id,
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Show<U> {
    pub fn new(name: impl Into<Id>, start: Quantity<U>, end: Quantity<U>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn from_f64(name: impl Into<Id>, start: f64, end: f64) -> Self {
        Self::new(name, Quantity::new(start), Quantity::new(end))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    /// Returns true if both times are finite and `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.interval().is_ok()
    }

    /// The half-open interval `[start, end)` this show occupies.
    pub fn interval(&self) -> Result<Interval<U>, IntervalError> {
        Interval::try_new(self.start, self.end)
    }
}

// =============================================================================
// Show Serde Support
// =============================================================================

mod serde_impl {
    use super::*;
    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::marker::PhantomData;

    impl<U: Unit> Serialize for Show<U> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut s = serializer.serialize_struct("Show", 3)?;
            s.serialize_field("name", self.name())?;
            s.serialize_field("start", &self.start.value())?;
            s.serialize_field("end", &self.end.value())?;
            s.end()
        }
    }

    /// Shows deserialize from either form found in line-up files:
    /// a `[name, start, end]` triple or a `{"name", "start", "end"}` map.
    impl<'de, U: Unit> Deserialize<'de> for Show<U> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct ShowVisitor<U: Unit>(PhantomData<U>);

            impl<'de, U: Unit> Visitor<'de> for ShowVisitor<U> {
                type Value = Show<U>;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter
                        .write_str("a [name, start, end] triple or a show object with 'name', 'start' and 'end' fields")
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let name: String = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                    let start: f64 = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                    let end: f64 = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                    Ok(Show::from_f64(name, start, end))
                }

                fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut name: Option<String> = None;
                    let mut start: Option<f64> = None;
                    let mut end: Option<f64> = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "name" => {
                                if name.is_some() {
                                    return Err(de::Error::duplicate_field("name"));
                                }
                                name = Some(map.next_value()?);
                            }
                            "start" => {
                                if start.is_some() {
                                    return Err(de::Error::duplicate_field("start"));
                                }
                                start = Some(map.next_value()?);
                            }
                            "end" => {
                                if end.is_some() {
                                    return Err(de::Error::duplicate_field("end"));
                                }
                                end = Some(map.next_value()?);
                            }
                            _ => {
                                let _ = map.next_value::<serde::de::IgnoredAny>()?;
                            }
                        }
                    }

                    let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
                    let start = start.ok_or_else(|| de::Error::missing_field("start"))?;
                    let end = end.ok_or_else(|| de::Error::missing_field("end"))?;
                    Ok(Show::from_f64(name, start, end))
                }
            }

            deserializer.deserialize_any(ShowVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Hour;

    type TestShow = Show<Hour>;

    #[test]
    fn test_well_formed() {
        assert!(TestShow::from_f64("A", 0.0, 1.0).is_well_formed());
        assert!(!TestShow::from_f64("B", 1.0, 1.0).is_well_formed());
        assert!(!TestShow::from_f64("C", 2.0, 1.0).is_well_formed());
        assert!(!TestShow::from_f64("D", f64::NAN, 1.0).is_well_formed());
    }

    #[test]
    fn test_deserialize_triple() {
        let show: TestShow = serde_json::from_str(r#"["The Demi-Conductors", 9.5, 11.0]"#).unwrap();
        assert_eq!(show.name(), "The Demi-Conductors");
        assert_eq!(show.start().value(), 9.5);
        assert_eq!(show.end().value(), 11.0);
    }

    #[test]
    fn test_deserialize_map() {
        let show: TestShow =
            serde_json::from_str(r#"{"name": "DICE Rollers", "start": 1.0, "end": 2.5}"#).unwrap();
        assert_eq!(show.name(), "DICE Rollers");
        assert_eq!(show.end().value(), 2.5);
    }

    #[test]
    fn test_deserialize_rejects_short_triple() {
        let result: Result<TestShow, _> = serde_json::from_str(r#"["Solo", 1.0]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result: Result<TestShow, _> = serde_json::from_str(r#"{"name": "NoTimes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_then_deserialize() {
        let show = TestShow::from_f64("Qubit & The Entanglers", 18.0, 19.5);
        let json = serde_json::to_string(&show).unwrap();
        let back: TestShow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, show);
    }
}
