//! A data-driven object factory.
//!
//! The factory knows nothing at compile time: given a qualified type name
//! and a list of argument values, it finds a registered constructor that
//! accepts them and builds a hosted instance. Default and copy construction
//! work even for constructors that never registered a body.

use typelens::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("=== Constructor-Driven Factory ===\n");

    let mut registry = Registry::new();
    registry.extend(extract_unit(lamp_unit())?)?;

    let lamp_desc = registry.descriptor("shop::Lamp").expect("Lamp is reflected");
    println!("Constructors of `shop::Lamp`:");
    for ctor in lamp_desc.constructors() {
        let class = if ctor.is_default() {
            " (default)"
        } else if ctor.is_copy() {
            " (copy)"
        } else if ctor.is_move() {
            " (move)"
        } else {
            ""
        };
        println!("  {}{class}", ctor.full_name);
    }
    println!();

    // Default construction seeds declared field defaults.
    let stock = spawn(&registry, "shop::Lamp", &[])?;
    show(&registry, "stock lamp", &stock);

    // Parameterized construction runs the registered body.
    let bright = spawn(&registry, "shop::Lamp", &[Value::Int(150)])?;
    show(&registry, "bright lamp", &bright);

    let labeled = spawn(
        &registry,
        "shop::Lamp",
        &[Value::Int(60), Value::from("desk")],
    )?;
    show(&registry, "labeled lamp", &labeled);

    // Copy construction clones the source instance, body or not.
    let cloned = spawn(&registry, "shop::Lamp", &[Value::Record(labeled.clone())])?;
    show(&registry, "cloned lamp", &cloned);
    assert_eq!(cloned, labeled);
    println!("✓ Copy matches its source");

    // No constructor takes a bool; the factory reports every rejection.
    match spawn(&registry, "shop::Lamp", &[Value::Bool(true)]) {
        Ok(_) => unreachable!("no constructor accepts a bool"),
        Err(err) => println!("✓ Rejected as expected: {err}"),
    }

    println!("\n✅ Factory example completed successfully!");
    Ok(())
}

/// Builds an instance of the named type from whatever constructor accepts
/// the arguments, trying them in declaration order.
fn spawn(registry: &Registry, type_name: &str, args: &[Value]) -> MetaResult<Instance> {
    let desc = registry
        .descriptor(type_name)
        .ok_or_else(|| MetaError::UnknownType {
            qualified_name: type_name.to_string(),
        })?;
    let mut last_err = MetaError::NotConstructible {
        constructor: type_name.to_string(),
    };
    for ctor in desc.constructors() {
        match registry.construct(ctor, args) {
            Ok(instance) => return Ok(instance),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}

/// Prints every per-instance field of a hosted instance.
fn show(registry: &Registry, label: &str, instance: &Instance) {
    print!("{label}: {} {{ ", instance.type_name());
    let mut first = true;
    registry.for_each_field(instance.type_name(), |field| {
        if field.is_static() {
            return;
        }
        let value = registry.get(field, instance).expect("field is readable");
        if !first {
            print!(", ");
        }
        print!("{}: {value:?}", field.name);
        first = false;
    });
    println!(" }}");
}

/// `shop::Lamp` with four constructors: default, copy, `(int)` and
/// `(int,std::string)`. The parameterized ones register bodies.
fn lamp_unit() -> CompilationUnit {
    let lamp = TypeDecl::builder()
        .name("Lamp")
        .qualified_name("shop::Lamp")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![
            FieldDecl::builder()
                .name("watts")
                .ty(TypeExpr::named("int"))
                .default_value(Some(Value::Int(40)))
                .build(),
            FieldDecl::builder()
                .name("label")
                .ty(TypeExpr::named("std::string"))
                .default_value(Some(Value::Str("unlabeled".into())))
                .build(),
        ])
        .constructors(vec![
            ConstructorDecl::builder().build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::reference(TypeExpr::named(
                    "Lamp",
                )))])
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::named(TypeExpr::named("int"), "watts")])
                .body(Some(NativeCtor::new(|inst, args| {
                    if let Some(slot) = inst.slot_mut(0) {
                        *slot = args[0].clone();
                    }
                    Ok(())
                })))
                .build(),
            ConstructorDecl::builder()
                .params(vec![
                    Param::named(TypeExpr::named("int"), "watts"),
                    Param::named(TypeExpr::named("std::string"), "label"),
                ])
                .body(Some(NativeCtor::new(|inst, args| {
                    if let Some(slot) = inst.slot_mut(0) {
                        *slot = args[0].clone();
                    }
                    if let Some(slot) = inst.slot_mut(1) {
                        *slot = args[1].clone();
                    }
                    Ok(())
                })))
                .build(),
        ])
        .build();

    let mut unit = CompilationUnit::new("shop");
    unit.push(lamp);
    unit
}
