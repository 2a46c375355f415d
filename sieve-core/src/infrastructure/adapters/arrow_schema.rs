// sieve-core/src/infrastructure/adapters/arrow_schema.rs
//
// Translates validated schema descriptions into Arrow types, the type system
// DataFusion plans and executes with.

use datafusion::arrow::datatypes::{DataType, Field, Fields, Schema};

use crate::domain::error::DomainError;
use crate::domain::schema::{PrimitiveType, SchemaDescription};

pub fn primitive_to_arrow(kind: PrimitiveType) -> DataType {
    match kind {
        PrimitiveType::String => DataType::Utf8,
        PrimitiveType::Integer => DataType::Int32,
        PrimitiveType::Double => DataType::Float64,
        PrimitiveType::Boolean => DataType::Boolean,
        PrimitiveType::Struct => DataType::Struct(Fields::empty()),
    }
}

/// Builds the Arrow type of a description, bottom-up.
pub fn build(description: &SchemaDescription) -> DataType {
    match description {
        SchemaDescription::Primitive(kind) => primitive_to_arrow(*kind),
        SchemaDescription::Struct(fields) => DataType::Struct(build_fields(fields)),
        SchemaDescription::Array {
            element,
            contains_null,
        } => DataType::new_list(build(element), *contains_null),
    }
}

fn build_fields(fields: &[crate::domain::schema::FieldDescription]) -> Fields {
    fields
        .iter()
        .map(|f| Field::new(&f.name, build(&f.data_type), f.nullable))
        .collect()
}

/// Top-level struct description as an Arrow schema (one column per field).
pub fn build_schema(description: &SchemaDescription) -> Result<Schema, DomainError> {
    match description {
        SchemaDescription::Struct(fields) => Ok(Schema::new(build_fields(fields))),
        other => Err(DomainError::SchemaError(format!(
            "a table schema must be a struct, found '{}'",
            other.kind_name()
        ))),
    }
}

/// Struct and list levels stacked in a type. Scalars (maps included) are 0.
pub fn nesting_depth(data_type: &DataType) -> usize {
    match data_type {
        DataType::Struct(fields) => {
            1 + fields
                .iter()
                .map(|f| nesting_depth(f.data_type()))
                .max()
                .unwrap_or(0)
        }
        DataType::List(inner) | DataType::LargeList(inner) | DataType::FixedSizeList(inner, _) => {
            1 + nesting_depth(inner.data_type())
        }
        _ => 0,
    }
}

/// Compact rendering in the schema files' vocabulary: `struct<a:integer>`, `array<string>`.
pub fn render_type(data_type: &DataType) -> String {
    match data_type {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => "string".to_string(),
        DataType::Int32 => "integer".to_string(),
        DataType::Float64 => "double".to_string(),
        DataType::Boolean => "boolean".to_string(),
        DataType::Struct(fields) => {
            let inner: Vec<String> = fields
                .iter()
                .map(|f| format!("{}:{}", f.name(), render_type(f.data_type())))
                .collect();
            format!("struct<{}>", inner.join(","))
        }
        DataType::List(inner) | DataType::LargeList(inner) | DataType::FixedSizeList(inner, _) => {
            format!("array<{}>", render_type(inner.data_type()))
        }
        other => other.to_string().to_lowercase(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::schema::RawSchemaNode;

    fn describe(yaml: &str) -> SchemaDescription {
        let node: RawSchemaNode = serde_yaml::from_str(yaml).unwrap();
        SchemaDescription::from_raw(&node, "schema").unwrap()
    }

    #[test]
    fn test_primitive_mapping() {
        assert_eq!(primitive_to_arrow(PrimitiveType::String), DataType::Utf8);
        assert_eq!(primitive_to_arrow(PrimitiveType::Integer), DataType::Int32);
        assert_eq!(primitive_to_arrow(PrimitiveType::Double), DataType::Float64);
        assert_eq!(primitive_to_arrow(PrimitiveType::Boolean), DataType::Boolean);
        assert_eq!(
            primitive_to_arrow(PrimitiveType::Struct),
            DataType::Struct(Fields::empty())
        );
    }

    #[test]
    fn test_struct_field_order_and_nullability() {
        let desc = describe(
            r#"
type: struct
fields:
  - name: id
    type: integer
    nullable: false
  - name: customer
    type: struct
    fields:
      - name: email
        type: string
  - name: total
    type: double
"#,
        );
        let schema = build_schema(&desc).unwrap();

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["id", "customer", "total"]);
        assert!(!schema.field(0).is_nullable());
        assert!(schema.field(1).is_nullable());
        assert_eq!(
            render_type(schema.field(1).data_type()),
            "struct<email:string>"
        );
        assert_eq!(schema.field(2).data_type(), &DataType::Float64);
    }

    #[test]
    fn test_array_element_types() {
        let desc = describe(
            r#"
type: struct
fields:
  - name: lines
    type: array
    containsNull: false
    elementType:
      type: struct
      fields:
        - name: qty
          type: integer
  - name: flags
    type: array
    elementType: boolean
"#,
        );
        let DataType::Struct(fields) = build(&desc) else {
            panic!("Expected struct");
        };

        match fields[0].data_type() {
            DataType::List(item) => {
                assert!(!item.is_nullable());
                assert_eq!(render_type(item.data_type()), "struct<qty:integer>");
            }
            other => panic!("Expected list, got {:?}", other),
        }
        match fields[1].data_type() {
            DataType::List(item) => {
                assert!(item.is_nullable());
                assert_eq!(item.data_type(), &DataType::Boolean);
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_top_level_array_and_primitive() {
        let array = build(&describe("type: array\nelementType: double\n"));
        assert_eq!(array, DataType::new_list(DataType::Float64, true));

        let primitive = build(&describe("type: Integer\n"));
        assert_eq!(primitive, DataType::Int32);
    }

    #[test]
    fn test_build_schema_rejects_non_struct() {
        let result = build_schema(&describe("type: string\n"));
        assert!(matches!(result, Err(DomainError::SchemaError(_))));
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(nesting_depth(&DataType::Int32), 0);
        let nested = build(&describe(
            r#"
type: struct
fields:
  - name: a
    type: array
    elementType:
      type: struct
      fields:
        - name: b
          type: integer
"#,
        ));
        // struct -> array -> struct -> integer
        assert_eq!(nesting_depth(&nested), 3);
        assert_eq!(nesting_depth(&DataType::Struct(Fields::empty())), 1);
    }
}
