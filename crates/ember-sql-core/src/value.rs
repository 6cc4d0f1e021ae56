//! SQL values and parameter handling.
//!
//! Values are always passed as positional parameters and never
//! interpolated into the SQL text, which keeps compiled statements safe
//! against SQL injection.

/// A value bound to a statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a [`SqlValue`].
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

macro_rules! impl_to_sql_value_int {
    ($($ty:ty),+) => {
        $(impl ToSqlValue for $ty {
            fn to_sql_value(self) -> SqlValue {
                SqlValue::Int(i64::from(self))
            }
        })+
    };
}

impl_to_sql_value_int!(i8, i16, i32, i64, u8, u16, u32);

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widening() {
        assert_eq!(42_i32.to_sql_value(), SqlValue::Int(42));
        assert_eq!(7_u8.to_sql_value(), SqlValue::Int(7));
    }

    #[test]
    fn test_option_maps_to_null() {
        assert_eq!(Option::<i64>::None.to_sql_value(), SqlValue::Null);
        assert_eq!(Some("x").to_sql_value(), SqlValue::Text(String::from("x")));
    }
}
