//! End-to-end behaviour of the super constructor call conversion.

use esl_common::SourceInfo;
use esl_transpile::{
    ChangeTracker, CompilerPass, ConvertSuperConstructorCalls, HotSwapCompilerPass,
    TranspileError, TranspileOptions,
};
use esl_tree::{NodeArena, NodeIndex, Printer, SyntaxKind};

fn registration(arena: &mut NodeArena, inherits: &str, child: &str, parent: &str) -> NodeIndex {
    let callee = arena.new_qname(inherits);
    let child = arena.new_qname(child);
    let parent = arena.new_qname(parent);
    let call = arena.new_call(callee, &[child, parent]).expect("call");
    arena.new_expr_result(call).expect("stmt")
}

fn super_call_stmt(arena: &mut NodeArena, args: &[&str]) -> (NodeIndex, NodeIndex) {
    let super_node = arena.new_super();
    let args: Vec<_> = args.iter().map(|name| arena.new_name(name)).collect();
    let call = arena.new_call(super_node, &args).expect("call");
    (arena.new_expr_result(call).expect("stmt"), call)
}

fn super_apply_stmt(arena: &mut NodeArena) -> (NodeIndex, NodeIndex) {
    let super_node = arena.new_super();
    let getprop = arena.new_getprop(super_node, "apply").expect("getprop");
    let receiver = arena.new_null();
    let args = arena.new_name("$jscomp$expanded$args");
    let call = arena.new_call(getprop, &[receiver, args]).expect("call");
    (arena.new_expr_result(call).expect("stmt"), call)
}

fn constructor(arena: &mut NodeArena, name: &str, params: &[&str], statement: NodeIndex) -> NodeIndex {
    let body = arena.new_block(&[statement]).expect("block");
    arena.new_function(name, params, body).expect("function")
}

fn run(arena: &mut NodeArena, externs: NodeIndex, root: NodeIndex) -> Result<usize, TranspileError> {
    run_with(arena, externs, root, &TranspileOptions::default())
}

fn run_with(
    arena: &mut NodeArena,
    externs: NodeIndex,
    root: NodeIndex,
    options: &TranspileOptions,
) -> Result<usize, TranspileError> {
    let mut changes = ChangeTracker::new();
    ConvertSuperConstructorCalls::new(options, &mut changes).process(arena, externs, root)?;
    Ok(changes.changes())
}

#[test]
fn test_direct_super_call() {
    let mut arena = NodeArena::new();
    let (stmt, old_call) = super_call_stmt(&mut arena, &["a", "b"]);
    let args = arena.children(old_call)[1..].to_vec();
    let function = constructor(&mut arena, "Child", &["a", "b"], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    assert_eq!(
        Printer::print(&arena, script),
        "function Child(a, b) { Parent.call(this, a, b); }\n$jscomp.inherits(Child, Parent);"
    );

    // Arguments are moved, not copied.
    let new_call = arena.first_child(stmt).expect("call");
    assert_ne!(new_call, old_call);
    assert_eq!(&arena.children(new_call)[2..], args.as_slice());
    assert_eq!(arena.parent(old_call), None);
    assert!(arena.collect_kind(script, SyntaxKind::Super).is_empty());
    arena.verify_ownership(script).expect("well formed");
}

#[test]
fn test_super_call_without_arguments() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    assert_eq!(
        Printer::print(&arena, script),
        "function Child() { Parent.call(this); }\n$jscomp.inherits(Child, Parent);"
    );
}

#[test]
fn test_expanded_super_apply() {
    let mut arena = NodeArena::new();
    let (stmt, call) = super_apply_stmt(&mut arena);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    assert_eq!(
        Printer::print(&arena, script),
        "function Child() { Parent.apply(this, $jscomp$expanded$args); }\n\
         $jscomp.inherits(Child, Parent);"
    );
    // The call node itself is kept.
    assert_eq!(arena.first_child(stmt), Some(call));
    arena.verify_ownership(script).expect("well formed");
}

#[test]
fn test_super_in_externs_is_deleted() {
    let mut arena = NodeArena::new();
    let externs_file = arena.add_source_file("externs.js", true);
    let (stmt, call) = super_call_stmt(&mut arena, &["x"]);
    let super_node = arena.first_child(call).expect("super");
    arena.set_source_info(super_node, SourceInfo::new(externs_file, 2, 2));
    let function = constructor(&mut arena, "Stub", &["x"], stmt);
    let externs = arena.new_script(&[function]).expect("script");

    // No registration exists; none is needed.
    assert_eq!(run(&mut arena, externs, NodeIndex::NONE), Ok(1));
    assert_eq!(Printer::print(&arena, externs), "function Stub(x) {}");
    assert_eq!(arena.parent(stmt), None);
    arena.verify_ownership(externs).expect("well formed");
}

#[test]
fn test_super_in_externs_tree_without_source_files_is_deleted() {
    let mut arena = NodeArena::new();
    let (stmt, call) = super_call_stmt(&mut arena, &["x"]);
    let super_node = arena.first_child(call).expect("super");
    let function = constructor(&mut arena, "Stub", &["x"], stmt);
    let externs = arena.new_script(&[function]).expect("script");
    assert!(arena.source_info(super_node).is_missing());

    assert_eq!(run(&mut arena, externs, NodeIndex::NONE), Ok(1));
    assert_eq!(Printer::print(&arena, externs), "function Stub(x) {}");
    arena.verify_ownership(externs).expect("well formed");
}

#[test]
fn test_externs_tree_does_not_leak_into_main_tree() {
    let mut arena = NodeArena::new();
    let (stub_stmt, _) = super_call_stmt(&mut arena, &[]);
    let stub = constructor(&mut arena, "Stub", &[], stub_stmt);
    let externs = arena.new_script(&[stub]).expect("externs");

    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let script = arena.new_script(&[function]).expect("script");

    // The main tree's super call still needs a registration.
    let err = run(&mut arena, externs, script).expect_err("no registration in main tree");
    assert!(matches!(err, TranspileError::MissingRegistration { function: f, .. } if f == function), "{err}");
    assert_eq!(Printer::print(&arena, externs), "function Stub() {}");
}

#[test]
fn test_externs_super_is_lowered_when_dropping_is_disabled() {
    let mut arena = NodeArena::new();
    let externs_file = arena.add_source_file("externs.js", true);
    let (stmt, call) = super_call_stmt(&mut arena, &[]);
    let super_node = arena.first_child(call).expect("super");
    arena.set_source_info(super_node, SourceInfo::new(externs_file, 1, 0));
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let externs = arena.new_script(&[function, reg]).expect("script");

    let options = TranspileOptions {
        drop_super_in_externs: false,
        ..TranspileOptions::default()
    };
    assert_eq!(run_with(&mut arena, externs, NodeIndex::NONE, &options), Ok(1));
    assert_eq!(
        Printer::print(&arena, externs),
        "function Child() { Parent.call(this); }\n$jscomp.inherits(Child, Parent);"
    );
}

#[test]
fn test_missing_registration_is_fatal() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let script = arena.new_script(&[function]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("no registration");
    assert_eq!(
        err,
        TranspileError::MissingRegistration {
            function,
            class_name: "Child".to_string(),
            inherits: "$jscomp.inherits".to_string(),
        }
    );
    assert!(err.is_internal());
    assert_eq!(err.node(), Some(function));
    assert_eq!(
        err.to_string(),
        format!("$jscomp.inherits() call not found for constructor `Child` ({function})")
    );
}

#[test]
fn test_registration_before_constructor_is_not_found() {
    let mut arena = NodeArena::new();
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let script = arena.new_script(&[reg, function]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("scan is forward only");
    assert!(matches!(err, TranspileError::MissingRegistration { .. }), "{err}");
}

#[test]
fn test_registration_for_name_prefix_is_skipped() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let longer = registration(&mut arena, "$jscomp.inherits", "ChildView", "Wrong");
    let unrelated = {
        let log = arena.new_qname("console.log");
        let call = arena.new_call(log, &[]).expect("call");
        arena.new_expr_result(call).expect("stmt")
    };
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, longer, unrelated, reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    let call = arena.first_child(stmt).expect("call");
    assert_eq!(Printer::print(&arena, call), "Parent.call(this)");
}

#[test]
fn test_first_registration_wins() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let first = registration(&mut arena, "$jscomp.inherits", "Child", "First");
    let second = registration(&mut arena, "$jscomp.inherits", "Child", "Second");
    let script = arena.new_script(&[function, first, second]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    let call = arena.first_child(stmt).expect("call");
    assert_eq!(Printer::print(&arena, call), "First.call(this)");
}

#[test]
fn test_second_run_changes_nothing() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &["a"]);
    let function = constructor(&mut arena, "Child", &["a"], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");
    let options = TranspileOptions::default();
    let mut changes = ChangeTracker::new();

    ConvertSuperConstructorCalls::new(&options, &mut changes)
        .process(&mut arena, NodeIndex::NONE, script)
        .expect("first run");
    assert!(changes.has_changes());
    assert_eq!(changes.changes(), 1);
    let once = Printer::print(&arena, script);

    changes.reset();
    assert!(!changes.has_changes());
    ConvertSuperConstructorCalls::new(&options, &mut changes)
        .process(&mut arena, NodeIndex::NONE, script)
        .expect("second run");
    assert!(!changes.has_changes());
    assert_eq!(Printer::print(&arena, script), once);
}

#[test]
fn test_var_declared_constructor() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &["a"]);
    let function = constructor(&mut arena, "", &["a"], stmt);
    let var = arena.new_var("Child", Some(function)).expect("var");
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[var, reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    assert_eq!(
        Printer::print(&arena, script),
        "var Child = function (a) { Parent.call(this, a); };\n$jscomp.inherits(Child, Parent);"
    );
}

#[test]
fn test_namespaced_constructor_and_superclass() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_apply_stmt(&mut arena);
    let function = constructor(&mut arena, "", &[], stmt);
    let target = arena.new_qname("ns.Child");
    let assign = arena.new_assign(target, function).expect("assign");
    let assign_stmt = arena.new_expr_result(assign).expect("stmt");
    let reg = registration(&mut arena, "$jscomp.inherits", "ns.Child", "lib.ui.Parent");
    let script = arena.new_script(&[assign_stmt, reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    assert_eq!(
        Printer::print(&arena, script),
        "ns.Child = function () { lib.ui.Parent.apply(this, $jscomp$expanded$args); };\n\
         $jscomp.inherits(ns.Child, lib.ui.Parent);"
    );
    arena.verify_ownership(script).expect("well formed");
}

#[test]
fn test_custom_inherits_function() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let ignored = registration(&mut arena, "$jscomp.inherits", "Child", "Wrong");
    let reg = registration(&mut arena, "goog.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, ignored, reg]).expect("script");

    let options = TranspileOptions::from_json(r#"{ "inheritsFunction": "goog.inherits" }"#).expect("options");
    assert_eq!(run_with(&mut arena, NodeIndex::NONE, script, &options), Ok(1));
    let call = arena.first_child(stmt).expect("call");
    assert_eq!(Printer::print(&arena, call), "Parent.call(this)");
}

#[test]
fn test_several_constructors_in_one_script() {
    let mut arena = NodeArena::new();
    let (a_stmt, _) = super_call_stmt(&mut arena, &[]);
    let a = constructor(&mut arena, "A", &[], a_stmt);
    let a_reg = registration(&mut arena, "$jscomp.inherits", "A", "Base");
    let (b_stmt, _) = super_apply_stmt(&mut arena);
    let b = constructor(&mut arena, "B", &[], b_stmt);
    let b_reg = registration(&mut arena, "$jscomp.inherits", "B", "A");
    let script = arena.new_script(&[a, a_reg, b, b_reg]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(2));
    assert_eq!(
        Printer::print(&arena, script),
        "function A() { Base.call(this); }\n\
         $jscomp.inherits(A, Base);\n\
         function B() { A.apply(this, $jscomp$expanded$args); }\n\
         $jscomp.inherits(B, A);"
    );
}

#[test]
fn test_constructor_nested_in_block() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let block = arena.new_block(&[function, reg]).expect("block");
    let outer = constructor(&mut arena, "module", &[], block);
    let script = arena.new_script(&[outer]).expect("script");

    assert_eq!(run(&mut arena, NodeIndex::NONE, script), Ok(1));
    assert_eq!(
        Printer::print(&arena, script),
        "function module() { { function Child() { Parent.call(this); } $jscomp.inherits(Child, Parent); } }"
    );
}

#[test]
fn test_source_info_of_direct_call() {
    let mut arena = NodeArena::new();
    let file = arena.add_source_file("child.js", false);
    let (stmt, call) = super_call_stmt(&mut arena, &["a"]);
    let super_node = arena.first_child(call).expect("super");
    let arg = arena.second_child(call).expect("arg");
    arena.set_source_info(call, SourceInfo::new(file, 3, 4));
    arena.set_source_info(super_node, SourceInfo::new(file, 3, 5));
    arena.set_source_info(arg, SourceInfo::new(file, 3, 10));
    let function = constructor(&mut arena, "Child", &["a"], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    run(&mut arena, NodeIndex::NONE, script).expect("converted");
    let new_call = arena.first_child(stmt).expect("call");
    let callee = arena.first_child(new_call).expect("Parent.call");
    let parent_name = arena.first_child(callee).expect("Parent");
    let receiver = arena.second_child(new_call).expect("this");

    assert_eq!(arena.source_info(new_call), SourceInfo::new(file, 3, 4));
    assert_eq!(arena.source_info(callee), SourceInfo::new(file, 3, 5));
    assert_eq!(arena.source_info(parent_name), SourceInfo::new(file, 3, 5));
    assert_eq!(arena.source_info(receiver), SourceInfo::new(file, 3, 4));
    assert_eq!(arena.source_info(arg), SourceInfo::new(file, 3, 10));
}

#[test]
fn test_source_info_of_expanded_apply() {
    let mut arena = NodeArena::new();
    let file = arena.add_source_file("child.js", false);
    let (stmt, call) = super_apply_stmt(&mut arena);
    let getprop = arena.first_child(call).expect("super.apply");
    let super_node = arena.first_child(getprop).expect("super");
    let null_node = arena.second_child(call).expect("null");
    arena.set_source_info(super_node, SourceInfo::new(file, 7, 2));
    arena.set_source_info(null_node, SourceInfo::new(file, 7, 14));
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "ns.Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    run(&mut arena, NodeIndex::NONE, script).expect("converted");
    let qname = arena.first_child(getprop).expect("ns.Parent");
    let receiver = arena.second_child(call).expect("this");
    assert_eq!(arena.kind(qname), Some(SyntaxKind::GetProp));
    assert_eq!(arena.source_info(qname), SourceInfo::new(file, 7, 2));
    for node in arena.children(qname).to_vec() {
        assert_eq!(arena.source_info(node), SourceInfo::new(file, 7, 2));
    }
    assert_eq!(arena.kind(receiver), Some(SyntaxKind::This));
    assert_eq!(arena.source_info(receiver), SourceInfo::new(file, 7, 14));
}

#[test]
fn test_unexpected_super_parent() {
    let mut arena = NodeArena::new();
    let super_node = arena.new_super();
    let var = arena.new_var("x", Some(super_node)).expect("var");
    let function = constructor(&mut arena, "Child", &[], var);
    let script = arena.new_script(&[function]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("super in initializer");
    assert!(
        matches!(err, TranspileError::UnexpectedSuperParent { node, parent_kind: "NAME", .. } if node == super_node),
        "{err}"
    );
}

#[test]
fn test_super_property_other_than_apply() {
    let mut arena = NodeArena::new();
    let super_node = arena.new_super();
    let getprop = arena.new_getprop(super_node, "bind").expect("getprop");
    let receiver = arena.new_null();
    let call = arena.new_call(getprop, &[receiver]).expect("call");
    let stmt = arena.new_expr_result(call).expect("stmt");
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("super.bind");
    assert_eq!(
        err,
        TranspileError::MalformedSuperApply {
            node: getprop,
            reason: "property accessed on super is not `apply`",
        }
    );
}

#[test]
fn test_super_passed_as_argument() {
    let mut arena = NodeArena::new();
    let f = arena.new_name("f");
    let super_node = arena.new_super();
    let call = arena.new_call(f, &[super_node]).expect("call");
    let stmt = arena.new_expr_result(call).expect("stmt");
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("f(super)");
    assert!(matches!(err, TranspileError::MalformedSuperCall { .. }), "{err}");
}

#[test]
fn test_super_outside_function() {
    let mut arena = NodeArena::new();
    let (stmt, call) = super_call_stmt(&mut arena, &[]);
    let script = arena.new_script(&[stmt]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("top level super()");
    assert_eq!(
        err,
        TranspileError::SuperOutsideFunction {
            call,
            position: SourceInfo::NONE,
        }
    );
}

#[test]
fn test_anonymous_constructor() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "", &[], stmt);
    let iife = arena.new_call(function, &[]).expect("call");
    let iife_stmt = arena.new_expr_result(iife).expect("stmt");
    let script = arena.new_script(&[iife_stmt]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("no name");
    assert!(
        matches!(err, TranspileError::AnonymousConstructor { function: f, .. } if f == function),
        "{err}"
    );
}

#[test]
fn test_registration_without_superclass() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &[]);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let callee = arena.new_qname("$jscomp.inherits");
    let child = arena.new_name("Child");
    let call = arena.new_call(callee, &[child]).expect("call");
    let reg = arena.new_expr_result(call).expect("stmt");
    let script = arena.new_script(&[function, reg]).expect("script");

    let err = run(&mut arena, NodeIndex::NONE, script).expect_err("one argument");
    assert_eq!(
        err,
        TranspileError::MalformedRegistration {
            statement: reg,
            class_name: "Child".to_string(),
            inherits: "$jscomp.inherits".to_string(),
        }
    );
}

#[test]
fn test_hot_swap_converts_changed_script() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_call_stmt(&mut arena, &["a"]);
    let function = constructor(&mut arena, "Child", &["a"], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");

    let options = TranspileOptions::default();
    let mut changes = ChangeTracker::new();
    ConvertSuperConstructorCalls::new(&options, &mut changes)
        .hot_swap_script(&mut arena, script, NodeIndex::NONE)
        .expect("converted");
    assert_eq!(changes.changes(), 1);
    let call = arena.first_child(stmt).expect("call");
    assert_eq!(Printer::print(&arena, call), "Parent.call(this, a)");
}

#[test]
fn test_process_accepts_empty_roots() {
    let mut arena = NodeArena::new();
    assert_eq!(run(&mut arena, NodeIndex::NONE, NodeIndex::NONE), Ok(0));
}

#[test]
fn test_program_round_trip_after_conversion() {
    let mut arena = NodeArena::new();
    let (stmt, _) = super_apply_stmt(&mut arena);
    let function = constructor(&mut arena, "Child", &[], stmt);
    let reg = registration(&mut arena, "$jscomp.inherits", "Child", "Parent");
    let script = arena.new_script(&[function, reg]).expect("script");
    run(&mut arena, NodeIndex::NONE, script).expect("converted");

    let program = esl_tree::Program::new(arena, NodeIndex::NONE, script);
    let json = program.to_json().expect("serialize");
    let loaded = esl_tree::Program::from_json(&json).expect("deserialize");
    loaded.arena.verify_ownership(loaded.root).expect("well formed");
    assert_eq!(
        Printer::print(&loaded.arena, loaded.root),
        Printer::print(&program.arena, program.root)
    );
}
