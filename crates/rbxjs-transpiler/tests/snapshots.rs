//! Snapshot tests for whole-unit output.
//!
//! Run `cargo insta review` to update snapshots after intentional changes.

use rbxjs_transpiler::{
    BinaryOp, CompilerOptions, Expr, SourceFile, Stmt, Type, transpile_source_file,
};

fn transpile(file: SourceFile) -> String {
    transpile_source_file(&file, &CompilerOptions::default()).expect("translation failed")
}

fn assign(name: &str, value: i32) -> Stmt {
    Stmt::block(vec![Stmt::expr(Expr::assign(
        Expr::ident(name),
        Expr::number(value),
    ))])
}

#[test]
fn if_else_chain() {
    // if (x) { a = 1; } else if (y) { a = 2; } else { a = 3; }
    let stmt = Stmt::if_stmt(
        Expr::ident("x"),
        assign("a", 1),
        Some(Stmt::if_stmt(
            Expr::ident("y"),
            assign("a", 2),
            Some(assign("a", 3)),
        )),
    );
    insta::assert_snapshot!(transpile(SourceFile::new("main.server.ts", vec![stmt])), @r#"
    -- luacheck: ignore
    local TS = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RuntimeLib);
    local RbxJs = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RbxJsRuntimeLib);
    if RbxJs.toBoolean(x) then
    	a = 1;
    elseif y then
    	a = 2;
    else
    	a = 3;
    end;
    "#);
}

#[test]
fn module_with_compound_assignments() {
    let counter = || Expr::property(Expr::ident("state"), "count").with_type(Type::Number);
    let body = vec![
        Stmt::local(
            "state",
            Some(Expr::call(Expr::ident("getState"), vec![])),
        ),
        Stmt::expr(Expr::binary(counter(), BinaryOp::AddAssign, Expr::number(1))),
        Stmt::export(
            "next",
            Expr::binary(counter(), BinaryOp::MulAssign, Expr::number(2)),
        ),
    ];
    insta::assert_snapshot!(transpile(SourceFile::new("counter.ts", body)), @r#"
    -- luacheck: ignore
    local TS = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RuntimeLib);
    local RbxJs = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RbxJsRuntimeLib);
    local _exports = {};
    local state = getState();
    local _0 = state; _0.count = _0.count + (1);
    _exports.next = (function() local _1 = state; _1.count = _1.count * (2); return _1.count; end)();
    return _exports;
    "#);
}

#[test]
fn reflection_and_equality() {
    let part = Expr::ident("Part").with_type(Type::object_with_bases(
        "Part",
        ["BasePart", "Instance", "Rbx_Instance"],
    ));
    let color = Expr::ident("Color3").with_type(Type::object("Color3"));
    let body = vec![
        Stmt::if_stmt(
            Expr::binary(Expr::ident("v"), BinaryOp::InstanceOf, part),
            Stmt::return_stmt(Some(Expr::string("part"))),
            Some(Stmt::if_stmt(
                Expr::binary(Expr::ident("v"), BinaryOp::InstanceOf, color),
                Stmt::return_stmt(Some(Expr::string("color"))),
                Some(Stmt::if_stmt(
                    Expr::binary(Expr::ident("v"), BinaryOp::StrictEq, Expr::null()),
                    Stmt::return_stmt(Some(Expr::string("nothing"))),
                    None,
                )),
            )),
        ),
        Stmt::export_assignment(Expr::binary(
            Expr::number(1),
            BinaryOp::Ne,
            Expr::number(2),
        )),
    ];
    insta::assert_snapshot!(transpile(SourceFile::new("describe.ts", body)), @r#"
    -- luacheck: ignore
    local TS = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RuntimeLib);
    local RbxJs = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RbxJsRuntimeLib);
    local _exports;
    if TS.isA(v, "Part") then
    	return "part";
    elseif (TS.typeof(v) == "Color3") then
    	return "color";
    elseif RbxJs.strictEquality(v, nil) then
    	return "nothing";
    end;
    _exports = 1 ~= 2;
    return _exports;
    "#);
}

#[test]
fn for_loop_with_membership() {
    let i = || Expr::ident("i").with_type(Type::Number);
    let body = vec![Stmt::for_loop(
        Some(Stmt::local("i", Some(Expr::number(0)))),
        Some(Expr::binary(i(), BinaryOp::Lt, Expr::ident("n"))),
        Some(Expr::binary(i(), BinaryOp::AddAssign, Expr::number(1))),
        Stmt::block(vec![Stmt::if_stmt(
            Expr::binary(i(), BinaryOp::In, Expr::ident("seen")),
            Stmt::block(vec![Stmt::break_stmt()]),
            None,
        )]),
    )];
    insta::assert_snapshot!(transpile(SourceFile::new("scan.client.ts", body)), @r#"
    -- luacheck: ignore
    local TS = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RuntimeLib);
    local RbxJs = require(game:GetService("ReplicatedStorage").RobloxTS.Include.RbxJsRuntimeLib);
    do
    	local i = 0;
    	while i < n do
    		if seen[i] ~= nil then
    			break;
    		end;
    		i = i + (1);
    	end;
    end;
    "#);
}
