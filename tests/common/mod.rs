// Common test fixtures: one declaration graph covering records, overloads,
// operators, constructors, statics, inheritance and enums.

use typelens::prelude::*;

/// Tag payload carrying a number.
#[derive(Debug, PartialEq)]
pub struct Marker(pub i32);

/// Tag payload carrying a label.
#[derive(Debug, PartialEq)]
pub struct Note(pub &'static str);

/// Extracts the whole fixture unit into a fresh registry.
pub fn fixture_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .extend(extract_unit(fixture_unit()).expect("fixture extracts cleanly"))
        .expect("fixture registers cleanly");
    registry
}

/// The fixture unit: a small telemetry domain.
pub fn fixture_unit() -> CompilationUnit {
    let mut unit = CompilationUnit::new("telemetry");
    unit.push(channel_decl());
    unit.push(codec_decl());
    unit.push(angle_decl());
    unit.push(builders_decl());
    unit.push(shared_decl());
    unit.push(quiet_decl());
    unit.push(select_decl());
    for decl in station_family() {
        unit.push(decl);
    }
    for decl in chain_family() {
        unit.push(decl);
    }
    unit.push(status_decl());
    unit.push(kind_decl());
    unit
}

/// `tel::Channel`: mode `all`, mixed access, defaults, one excluded field,
/// bodies for slot-backed reads and writes.
pub fn channel_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Channel")
        .qualified_name("tel::Channel")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![
            FieldDecl::builder()
                .name("id")
                .ty(TypeExpr::named("int"))
                .access(AccessLevel::Private)
                .immutable(true)
                .default_value(Some(Value::Int(7)))
                .build(),
            FieldDecl::builder()
                .name("gain")
                .ty(TypeExpr::named("double"))
                .default_value(Some(Value::Float(1.0)))
                .build(),
            FieldDecl::builder()
                .name("offset")
                .ty(TypeExpr::named("int"))
                .access(AccessLevel::Private)
                .default_value(Some(Value::Int(0)))
                .build(),
            FieldDecl::builder()
                .name("scratch")
                .ty(TypeExpr::named("int"))
                .directives(vec![Directive::exclude()])
                .build(),
        ])
        .methods(vec![
            MethodDecl::builder()
                .name("norm")
                .return_type(TypeExpr::named("double"))
                .quals(MethodQuals::const_only())
                .body(Some(NativeFn::new(|recv, _args| {
                    let inst = recv.expect("instance method");
                    Ok(inst.slot(1).cloned().unwrap_or_default())
                })))
                .build(),
            MethodDecl::builder()
                .name("shift")
                .params(vec![Param::named(TypeExpr::named("int"), "delta")])
                .body(Some(NativeFn::new(|recv, args| {
                    let inst = recv.expect("instance method");
                    let old = match inst.slot(2) {
                        Some(Value::Int(n)) => *n,
                        _ => 0,
                    };
                    let delta = match &args[0] {
                        Value::Int(n) => *n,
                        _ => 0,
                    };
                    if let Some(slot) = inst.slot_mut(2) {
                        *slot = Value::Int(old + delta);
                    }
                    Ok(Value::Null)
                })))
                .build(),
        ])
        .constructors(vec![ConstructorDecl::builder().build()])
        .build()
}

/// `tel::Codec`: nine `decode` overloads distinguished by parameters and
/// qualifiers, plus a method with named parameters. No bodies.
pub fn codec_decl() -> TypeDecl {
    let int = TypeExpr::named("int");
    let decode = |params: Vec<Param>, quals: MethodQuals| {
        MethodDecl::builder()
            .name("decode")
            .params(params)
            .quals(quals)
            .build()
    };
    let lref = MethodQuals {
        is_const: false,
        is_volatile: false,
        ref_qual: RefQual::Lvalue,
    };
    let const_lref = MethodQuals {
        is_const: true,
        is_volatile: false,
        ref_qual: RefQual::Lvalue,
    };
    let rref = MethodQuals {
        is_const: false,
        is_volatile: false,
        ref_qual: RefQual::Rvalue,
    };
    TypeDecl::builder()
        .name("Codec")
        .qualified_name("tel::Codec")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .methods(vec![
            decode(vec![], MethodQuals::default()),
            decode(vec![Param::of(int.clone())], MethodQuals::default()),
            decode(
                vec![Param::of(TypeExpr::named("double"))],
                MethodQuals::default(),
            ),
            decode(
                vec![
                    Param::of(int.clone()),
                    Param::of(TypeExpr::named("double")),
                ],
                MethodQuals::default(),
            ),
            decode(
                vec![Param::of(TypeExpr::named("bool"))],
                MethodQuals::const_only(),
            ),
            decode(
                vec![Param::of(TypeExpr::named("std::string"))],
                MethodQuals::const_only(),
            ),
            decode(
                vec![Param::of(int.clone()), Param::of(int.clone())],
                const_lref,
            ),
            decode(vec![Param::of(int.clone()), Param::of(int.clone())], lref),
            decode(vec![Param::of(int.clone()), Param::of(int.clone())], rref),
            MethodDecl::builder()
                .name("tune")
                .params(vec![
                    Param::named(int.clone(), "rate"),
                    Param::named(TypeExpr::named("double"), "depth"),
                    Param::named(int, "bias"),
                ])
                .build(),
        ])
        .build()
}

/// `tel::Angle`: eight operator methods whose spellings pass straight into
/// the synthesized names.
pub fn angle_decl() -> TypeDecl {
    let self_ref = || Param::of(TypeExpr::reference(TypeExpr::named("Angle")));
    let op = |name: &str, params: Vec<Param>, ret: TypeExpr, quals: MethodQuals| {
        MethodDecl::builder()
            .name(name)
            .params(params)
            .return_type(ret)
            .quals(quals)
            .build()
    };
    TypeDecl::builder()
        .name("Angle")
        .qualified_name("tel::Angle")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![FieldDecl::builder()
            .name("radians")
            .ty(TypeExpr::named("double"))
            .default_value(Some(Value::Float(0.0)))
            .build()])
        .methods(vec![
            op(
                "operator=",
                vec![self_ref()],
                TypeExpr::ref_mut(TypeExpr::named("Angle")),
                MethodQuals::default(),
            ),
            op(
                "operator+=",
                vec![self_ref()],
                TypeExpr::ref_mut(TypeExpr::named("Angle")),
                MethodQuals::default(),
            ),
            op(
                "operator+",
                vec![self_ref()],
                TypeExpr::named("Angle"),
                MethodQuals::const_only(),
            ),
            op(
                "operator++",
                vec![],
                TypeExpr::ref_mut(TypeExpr::named("Angle")),
                MethodQuals::default(),
            ),
            op(
                "operator bool",
                vec![],
                TypeExpr::named("bool"),
                MethodQuals::const_only(),
            ),
            op(
                "operator const char *",
                vec![],
                TypeExpr::named("const char *"),
                MethodQuals::const_only(),
            ),
            op(
                "operator<=>",
                vec![self_ref()],
                TypeExpr::named("int"),
                MethodQuals::const_only(),
            ),
            op(
                "operator*",
                vec![],
                TypeExpr::named("double"),
                MethodQuals::const_only(),
            ),
        ])
        .build()
}

/// `tel::Builders`: six reflected constructors (default, copy, move and
/// three ordinary ones); a generic and an implicit declaration are skipped
/// structurally. The `(int)` constructor carries two tags.
pub fn builders_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Builders")
        .qualified_name("tel::Builders")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![
            FieldDecl::builder()
                .name("mode")
                .ty(TypeExpr::named("int"))
                .default_value(Some(Value::Int(0)))
                .build(),
            FieldDecl::builder()
                .name("label")
                .ty(TypeExpr::named("std::string"))
                .default_value(Some(Value::Str(String::new())))
                .build(),
        ])
        .constructors(vec![
            ConstructorDecl::builder().build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::reference(TypeExpr::named(
                    "Builders",
                )))])
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::xfer(TypeExpr::named(
                    "Builders",
                )))])
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::named(TypeExpr::named("int"), "mode")])
                .directives(vec![
                    Directive::tag(Marker(7)),
                    Directive::tag(Note("seven")),
                ])
                .body(Some(NativeCtor::new(|inst, args| {
                    if let Some(slot) = inst.slot_mut(0) {
                        *slot = args[0].clone();
                    }
                    Ok(())
                })))
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::named("bool"))])
                .build(),
            ConstructorDecl::builder()
                .params(vec![
                    Param::of(TypeExpr::named("int")),
                    Param::of(TypeExpr::named("double")),
                ])
                .body(Some(NativeCtor::new(|inst, args| {
                    if let Some(slot) = inst.slot_mut(0) {
                        *slot = args[0].clone();
                    }
                    Ok(())
                })))
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::named("T"))])
                .is_generic(true)
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::reference(TypeExpr::named(
                    "Builders",
                )))])
                .is_implicit(true)
                .build(),
        ])
        .build()
}

/// `tel::Shared`: static fields (one writable, one immutable) plus a static
/// method with a body.
pub fn shared_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Shared")
        .qualified_name("tel::Shared")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![
            FieldDecl::builder()
                .name("count")
                .ty(TypeExpr::named("int"))
                .is_static(true)
                .default_value(Some(Value::Int(5)))
                .build(),
            FieldDecl::builder()
                .name("family")
                .ty(TypeExpr::named("std::string"))
                .is_static(true)
                .immutable(true)
                .default_value(Some(Value::Str("shared".into())))
                .build(),
            FieldDecl::builder()
                .name("local")
                .ty(TypeExpr::named("int"))
                .build(),
        ])
        .methods(vec![MethodDecl::builder()
            .name("version")
            .return_type(TypeExpr::named("int"))
            .is_static(true)
            .body(Some(NativeFn::new(|_recv, _args| Ok(Value::Int(7)))))
            .build()])
        .constructors(vec![ConstructorDecl::builder().build()])
        .build()
}

/// `tel::Quiet`: mode `none` with no member directives; everything declared,
/// nothing reflected.
pub fn quiet_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Quiet")
        .qualified_name("tel::Quiet")
        .kind(TypeKind::Record)
        .directives(vec![Directive::none()])
        .fields(vec![
            FieldDecl::builder()
                .name("x")
                .ty(TypeExpr::named("int"))
                .build(),
            FieldDecl::builder()
                .name("y")
                .ty(TypeExpr::named("int"))
                .build(),
        ])
        .methods(vec![MethodDecl::builder().name("poke").build()])
        .constructors(vec![ConstructorDecl::builder().build()])
        .build()
}

/// `tel::Select`: mode `none` with explicit markers. Field `b` carries two
/// `Marker` tags (first one wins) and a `Note`; `d` shows exclude beating
/// include.
pub fn select_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Select")
        .qualified_name("tel::Select")
        .kind(TypeKind::Record)
        .directives(vec![Directive::none()])
        .fields(vec![
            FieldDecl::builder()
                .name("a")
                .ty(TypeExpr::named("int"))
                .directives(vec![Directive::include()])
                .build(),
            FieldDecl::builder()
                .name("b")
                .ty(TypeExpr::named("int"))
                .directives(vec![
                    Directive::tag(Marker(3)),
                    Directive::tag(Marker(9)),
                    Directive::tag(Note("beta")),
                ])
                .build(),
            FieldDecl::builder()
                .name("c")
                .ty(TypeExpr::named("int"))
                .build(),
            FieldDecl::builder()
                .name("d")
                .ty(TypeExpr::named("int"))
                .directives(vec![Directive::exclude(), Directive::include()])
                .build(),
        ])
        .methods(vec![
            MethodDecl::builder()
                .name("probe")
                .directives(vec![Directive::tag(Marker(5))])
                .build(),
            MethodDecl::builder().name("hidden").build(),
        ])
        .constructors(vec![
            ConstructorDecl::builder()
                .directives(vec![Directive::include()])
                .build(),
            ConstructorDecl::builder()
                .params(vec![Param::of(TypeExpr::named("int"))])
                .build(),
        ])
        .build()
}

/// The inheritance family around `tel::Station`.
///
/// Station's own methods: 3 (`send` overriding, `report`, `reset`).
/// Bases: ProbeBase at Private (1 method), LinkBase at Protected (0
/// methods), WireBase at Public (3 methods, `send` virtual with a body),
/// GhostBase at Public but never opted in.
pub fn station_family() -> Vec<TypeDecl> {
    let probe_base = TypeDecl::builder()
        .name("ProbeBase")
        .qualified_name("tel::ProbeBase")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![FieldDecl::builder()
            .name("base_id")
            .ty(TypeExpr::named("int"))
            .default_value(Some(Value::Int(1)))
            .build()])
        .methods(vec![MethodDecl::builder().name("calibrate").build()])
        .build();

    let link_base = TypeDecl::builder()
        .name("LinkBase")
        .qualified_name("tel::LinkBase")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![FieldDecl::builder()
            .name("link")
            .ty(TypeExpr::named("int"))
            .build()])
        .build();

    let wire_base = TypeDecl::builder()
        .name("WireBase")
        .qualified_name("tel::WireBase")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .fields(vec![FieldDecl::builder()
            .name("port")
            .ty(TypeExpr::named("int"))
            .default_value(Some(Value::Int(80)))
            .build()])
        .methods(vec![
            MethodDecl::builder()
                .name("send")
                .is_virtual(true)
                .return_type(TypeExpr::named("std::string"))
                .body(Some(NativeFn::new(|_recv, _args| {
                    Ok(Value::Str("wire".into()))
                })))
                .build(),
            MethodDecl::builder().name("recv").build(),
            MethodDecl::builder().name("flush").build(),
        ])
        .build();

    // Declared but never annotated: a relation edge to nowhere.
    let ghost_base = TypeDecl::builder()
        .name("GhostBase")
        .qualified_name("tel::GhostBase")
        .kind(TypeKind::Record)
        .fields(vec![FieldDecl::builder()
            .name("ghostly")
            .ty(TypeExpr::named("int"))
            .build()])
        .build();

    let station = TypeDecl::builder()
        .name("Station")
        .qualified_name("tel::Station")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .bases(vec![
            BaseDecl::new("tel::ProbeBase", AccessLevel::Private),
            BaseDecl::new("tel::LinkBase", AccessLevel::Protected),
            BaseDecl::new("tel::WireBase", AccessLevel::Public),
            BaseDecl::new("tel::GhostBase", AccessLevel::Public),
        ])
        .fields(vec![FieldDecl::builder()
            .name("site")
            .ty(TypeExpr::named("int"))
            .build()])
        .methods(vec![
            MethodDecl::builder()
                .name("send")
                .is_virtual(true)
                .return_type(TypeExpr::named("std::string"))
                .body(Some(NativeFn::new(|_recv, _args| {
                    Ok(Value::Str("station".into()))
                })))
                .build(),
            MethodDecl::builder().name("report").build(),
            MethodDecl::builder().name("reset").build(),
        ])
        .constructors(vec![ConstructorDecl::builder().build()])
        .build();

    vec![probe_base, link_base, wire_base, ghost_base, station]
}

/// A three-deep chain where the lower relation is Private: `Top` inherits
/// `Mid` publicly, `Mid` inherits `Deep` privately. A Public-bounded walk
/// from `Top` must stop at `Mid`.
pub fn chain_family() -> Vec<TypeDecl> {
    let deep = TypeDecl::builder()
        .name("Deep")
        .qualified_name("tel::Deep")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .methods(vec![MethodDecl::builder().name("deep_op").build()])
        .build();
    let mid = TypeDecl::builder()
        .name("Mid")
        .qualified_name("tel::Mid")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .bases(vec![BaseDecl::new("tel::Deep", AccessLevel::Private)])
        .methods(vec![MethodDecl::builder().name("mid_op").build()])
        .build();
    let top = TypeDecl::builder()
        .name("Top")
        .qualified_name("tel::Top")
        .kind(TypeKind::Record)
        .directives(vec![Directive::all()])
        .bases(vec![BaseDecl::new("tel::Mid", AccessLevel::Public)])
        .methods(vec![MethodDecl::builder().name("top_op").build()])
        .build();
    vec![deep, mid, top]
}

/// `tel::Status`: a reflected enum.
pub fn status_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Status")
        .qualified_name("tel::Status")
        .kind(TypeKind::Enum)
        .directives(vec![Directive::all()])
        .enumerators(vec![
            EnumeratorDecl::new("Idle", 3),
            EnumeratorDecl::new("Busy", 5),
            EnumeratorDecl::new("Fault", 13),
        ])
        .build()
}

/// `tel::event::Kind`: a namespaced enum reflected under mode `none`.
pub fn kind_decl() -> TypeDecl {
    TypeDecl::builder()
        .name("Kind")
        .qualified_name("tel::event::Kind")
        .kind(TypeKind::Enum)
        .directives(vec![Directive::none()])
        .enumerators(vec![
            EnumeratorDecl::new("Start", 1),
            EnumeratorDecl::new("Stop", 2),
        ])
        .build()
}
