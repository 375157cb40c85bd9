//! Conversions between [`PropValue`] and the driver's `neo4rs::BoltType`.
//!
//! Property values travel to the driver as bound parameters
//! (`CypherQuery::params_from`) and come back as scalar columns of result
//! rows.

use neo4rs::BoltType;

use crate::error::ArtisanError;
use crate::pattern::PropValue;

/// Returns a human-readable name for a [`BoltType`] variant.
pub fn type_name(v: &BoltType) -> &'static str {
    match v {
        BoltType::Null(_) => "Null",
        BoltType::Boolean(_) => "Boolean",
        BoltType::Integer(_) => "Integer",
        BoltType::Float(_) => "Float",
        BoltType::String(_) => "String",
        BoltType::Bytes(_) => "Bytes",
        BoltType::List(_) => "List",
        BoltType::Map(_) => "Map",
        BoltType::Node(_) => "Node",
        BoltType::Relation(_) => "Relationship",
        BoltType::UnboundedRelation(_) => "UnboundedRelationship",
        BoltType::Path(_) => "Path",
        BoltType::Point2D(_) => "Point2D",
        BoltType::Point3D(_) => "Point3D",
        BoltType::Duration(_) => "Duration",
        BoltType::Date(_) => "Date",
        BoltType::Time(_) => "Time",
        BoltType::LocalTime(_) => "LocalTime",
        BoltType::LocalDateTime(_) => "LocalDateTime",
        BoltType::DateTime(_) => "DateTime",
        BoltType::DateTimeZoneId(_) => "DateTimeZoneId",
    }
}

impl From<PropValue> for BoltType {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::String(value) => BoltType::String(neo4rs::BoltString { value }),
            PropValue::Integer(value) => BoltType::Integer(neo4rs::BoltInteger { value }),
            PropValue::Float(value) => BoltType::Float(neo4rs::BoltFloat { value }),
            PropValue::Boolean(value) => BoltType::Boolean(neo4rs::BoltBoolean { value }),
        }
    }
}

/// Only scalar values convert; lists, maps, graph and temporal values are
/// rejected with [`ArtisanError::TypeMismatch`].
impl TryFrom<BoltType> for PropValue {
    type Error = ArtisanError;

    fn try_from(value: BoltType) -> Result<Self, Self::Error> {
        match value {
            BoltType::String(s) => Ok(PropValue::String(s.value)),
            BoltType::Integer(i) => Ok(PropValue::Integer(i.value)),
            BoltType::Float(x) => Ok(PropValue::Float(x.value)),
            BoltType::Boolean(b) => Ok(PropValue::Boolean(b.value)),
            other => Err(ArtisanError::type_mismatch(
                "String, Integer, Float or Boolean",
                type_name(&other),
            )),
        }
    }
}
