//! Enumerating reflected enums through the process-wide registry.
//!
//! Installs a registry globally, lists every reflected enum with its
//! enumerators, and exercises the strict and lenient name lookups.

use typelens::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("=== Reflected Enum Dump ===\n");

    let mut registry = Registry::new();
    registry.extend(extract_unit(hardware_unit())?)?;
    install_global(registry)?;
    let registry = global().expect("just installed");

    // Every reflected enum, in qualified-name order.
    for desc in registry.types() {
        let Some(shape) = desc.as_enum() else {
            continue;
        };
        println!("{} ({} enumerators)", desc.qualified_name, shape.len());
        for enumerator in shape.iter() {
            println!("  {:>10} = {}", enumerator.name, enumerator.value);
        }
        println!();
    }

    let pin = registry
        .descriptor("hw::Pin")
        .and_then(|d| d.as_enum())
        .expect("Pin is a reflected enum");

    // Name -> value -> name.
    let value = pin.from_name("Analog").expect("declared enumerator");
    println!("✓ Pin::Analog round-trips through {value}: {}", pin.to_name(value)?);

    // Strict lookup reports unknown values; the lenient one answers "".
    match pin.to_name(99) {
        Ok(_) => unreachable!("99 is not a Pin value"),
        Err(err) => println!("✓ Strict lookup rejected 99: {err}"),
    }
    println!(
        "✓ Lenient lookup for 99: {:?} (is_valid: {})",
        pin.to_name_safe(99),
        pin.is_valid(99)
    );

    println!("\n✅ Enum dump completed successfully!");
    Ok(())
}

/// Two enums and one record; only the enums show up in the dump.
fn hardware_unit() -> CompilationUnit {
    let pin = TypeDecl::builder()
        .name("Pin")
        .qualified_name("hw::Pin")
        .kind(TypeKind::Enum)
        .directives(vec![Directive::all()])
        .enumerators(vec![
            EnumeratorDecl::new("Digital", 0),
            EnumeratorDecl::new("Analog", 1),
            EnumeratorDecl::new("Pwm", 2),
        ])
        .build();

    let edge = TypeDecl::builder()
        .name("Edge")
        .qualified_name("hw::Edge")
        .kind(TypeKind::Enum)
        .directives(vec![Directive::all()])
        .enumerators(vec![
            EnumeratorDecl::new("Rising", 1),
            EnumeratorDecl::new("Falling", 2),
            EnumeratorDecl::new("Both", 3),
        ])
        .build();

    let board = TypeDecl::builder()
        .name("Board")
        .qualified_name("hw::Board")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![FieldDecl::builder()
            .name("pins")
            .ty(TypeExpr::named("int"))
            .build()])
        .build();

    let mut unit = CompilationUnit::new("hardware");
    unit.push(pin);
    unit.push(edge);
    unit.push(board);
    unit
}
