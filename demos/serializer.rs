//! Tag-driven serialization over reflected metadata, in both directions.
//!
//! A serializer that has never seen the `Sprite` type walks its descriptor,
//! skips fields tagged `Transient`, honors `Rename` tags for key names, and
//! pulls values straight out of a hosted instance. The deserializer runs the
//! same walk the other way: it parses foreign text and writes each fragment
//! into the matching field. Adding a field to the declaration changes both
//! directions with no serializer changes.

use typelens::prelude::*;

/// Marks a field as not worth persisting.
struct Transient;

/// Overrides the key a field serializes under.
struct Rename(&'static str);

fn main() -> anyhow::Result<()> {
    println!("=== Tag-Driven Serialization ===\n");

    let mut registry = Registry::new();
    registry.extend(extract_unit(sprite_unit())?)?;
    println!("✓ Extracted {} types", registry.len());

    // Build a sprite and give it some state through the metadata API.
    let sprite_desc = registry
        .descriptor("app::Sprite")
        .expect("Sprite is reflected");
    let ctor = sprite_desc
        .default_constructor()
        .expect("Sprite has a default constructor");
    let mut sprite = registry.construct(ctor, &[])?;

    registry.set(
        sprite_desc.field("name").expect("field exists"),
        &mut sprite,
        Value::from("player"),
    )?;
    registry.set(
        sprite_desc.field("frame").expect("field exists"),
        &mut sprite,
        Value::Int(3),
    )?;
    registry.set(
        sprite_desc.field("cache").expect("field exists"),
        &mut sprite,
        Value::Int(9999),
    )?;

    // The base subobject is reachable through the same descriptors.
    let vec2_desc = registry.descriptor("app::Vec2").expect("Vec2 is reflected");
    registry.set(
        vec2_desc.field("x").expect("field exists"),
        &mut sprite,
        Value::Float(12.5),
    )?;

    println!("✓ Constructed and populated an `app::Sprite`\n");

    let json = serialize(&registry, &sprite);
    println!("Serialized (cache is Transient, name renamed to \"id\"):");
    println!("{json}");

    // Parse the text back into a fresh instance through the same descriptors.
    let mut restored = registry.construct(ctor, &[])?;
    deserialize(&registry, &mut restored, &json)?;

    let name = registry.get(sprite_desc.field("name").expect("field exists"), &restored)?;
    let frame = registry.get(sprite_desc.field("frame").expect("field exists"), &restored)?;
    let x = registry.get(vec2_desc.field("x").expect("field exists"), &restored)?;
    println!("\nDeserialized back: name={name:?} frame={frame:?} x={x:?}");
    assert_eq!(name, Value::from("player"));
    assert_eq!(frame, Value::Int(3));
    assert_eq!(x, Value::Float(12.5));
    assert_eq!(
        registry.get(sprite_desc.field("cache").expect("field exists"), &restored)?,
        Value::Null,
        "Transient fields never travel"
    );
    println!("✓ Round trip restored every serialized field");

    println!("\n✅ Serialization example completed successfully!");
    Ok(())
}

/// Renders an instance as a JSON object by walking its reflected fields,
/// own first and then public bases.
fn serialize(registry: &Registry, instance: &Instance) -> String {
    let mut entries = Vec::new();
    registry.for_each_field_inherited(instance.type_name(), AccessLevel::Public, |field| {
        if field.is_static() || field.has_tag::<Transient>() {
            return;
        }
        let mut key = field.name.clone();
        field.with_tag::<Rename>(|r| key = r.0.to_string());
        let value = registry
            .get(field, instance)
            .expect("included fields are readable");
        entries.push(format!("  \"{key}\": {}", render(registry, &value)));
    });
    format!("{{\n{}\n}}", entries.join(",\n"))
}

/// One JSON value. Nested records recurse through the same descriptors.
fn render(registry: &Registry, value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Str(s) => format!("{s:?}"),
        Value::Record(inst) => serialize(registry, inst),
    }
}

/// The inverse walk: looks each field's key up in the parsed text and writes
/// the fragment through `set`. Renames and `Transient` skips behave exactly
/// as they do when serializing; absent keys keep their seeded defaults.
fn deserialize(registry: &Registry, instance: &mut Instance, text: &str) -> anyhow::Result<()> {
    let entries = parse_object(text)?;
    let type_name = instance.type_name().to_string();
    registry.for_each_field_inherited(&type_name, AccessLevel::Public, |field| {
        if field.is_static() || field.has_tag::<Transient>() {
            return;
        }
        let mut key = field.name.clone();
        field.with_tag::<Rename>(|r| key = r.0.to_string());
        let Some((_, fragment)) = entries.iter().find(|(k, _)| *k == key) else {
            return;
        };
        let current = registry
            .get(field, instance)
            .expect("included fields are readable");
        let parsed = parse_value(&current, fragment).expect("fragment matches the field's shape");
        registry
            .set(field, instance, parsed)
            .expect("parsed values type-check");
    });
    Ok(())
}

/// Splits `{ "key": value, ... }` into key/fragment pairs, honoring nested
/// braces. Good enough to round-trip our own output; not a JSON parser.
fn parse_object(text: &str) -> anyhow::Result<Vec<(String, String)>> {
    let body = text
        .trim()
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or_else(|| anyhow::anyhow!("not an object: {text:?}"))?;

    let mut raw = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, byte) in body.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                raw.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    raw.push(&body[start..]);

    raw.into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let (key, fragment) = entry
                .split_once(':')
                .ok_or_else(|| anyhow::anyhow!("missing `:` in {entry:?}"))?;
            Ok((
                key.trim().trim_matches('"').to_string(),
                fragment.trim().to_string(),
            ))
        })
        .collect()
}

/// Parses one fragment into the variant the field currently holds, so the
/// seeded defaults drive the expected shape.
fn parse_value(current: &Value, fragment: &str) -> anyhow::Result<Value> {
    Ok(match current {
        Value::Null => Value::Null,
        Value::Bool(_) => Value::Bool(fragment.parse()?),
        Value::Int(_) => Value::Int(fragment.parse()?),
        Value::Float(_) => Value::Float(fragment.parse()?),
        Value::Str(_) => Value::from(fragment.trim_matches('"')),
        Value::Record(_) => anyhow::bail!("nested records deserialize through their own fields"),
    })
}

/// One unit: a vector base and a sprite derived from it.
fn sprite_unit() -> CompilationUnit {
    let vec2 = TypeDecl::builder()
        .name("Vec2")
        .qualified_name("app::Vec2")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![
            FieldDecl::builder()
                .name("x")
                .ty(TypeExpr::named("double"))
                .default_value(Some(Value::Float(0.0)))
                .build(),
            FieldDecl::builder()
                .name("y")
                .ty(TypeExpr::named("double"))
                .default_value(Some(Value::Float(0.0)))
                .build(),
        ])
        .build();

    let sprite = TypeDecl::builder()
        .name("Sprite")
        .qualified_name("app::Sprite")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .bases(vec![BaseDecl::new("app::Vec2", AccessLevel::Public)])
        .fields(vec![
            FieldDecl::builder()
                .name("name")
                .ty(TypeExpr::named("std::string"))
                .directives(vec![Directive::tag(Rename("id"))])
                .default_value(Some(Value::Str(String::new())))
                .build(),
            FieldDecl::builder()
                .name("frame")
                .ty(TypeExpr::named("int"))
                .default_value(Some(Value::Int(0)))
                .build(),
            FieldDecl::builder()
                .name("cache")
                .ty(TypeExpr::named("int"))
                .directives(vec![Directive::tag(Transient)])
                .build(),
        ])
        .constructors(vec![ConstructorDecl::builder().build()])
        .build();

    let mut unit = CompilationUnit::new("sprites");
    unit.push(vec2);
    unit.push(sprite);
    unit
}
