//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing and check the
//! rendered tree, the resulting scope tree and the reported diagnostics.

use contractc::{
    ast::statements::ContractStatement,
    errors::errors::Error,
    format_diagnostic,
    lexer::{buffer::TokenStream, lexer::tokenize},
    parser::parser::{parse, Parser},
    symbol::symbol::SymbolKind,
};

fn run(source: &str) -> (Parser, Result<ContractStatement, Error>) {
    let tokens = tokenize(source).unwrap();
    parse(TokenStream::new(tokens))
}

fn parse_ok(source: &str) -> (Parser, ContractStatement) {
    let (parser, contract) = run(source);
    match contract {
        Ok(contract) => (parser, contract),
        Err(error) => panic!("unexpected parse error: {}", error),
    }
}

fn parse_err(source: &str) -> Error {
    match run(source).1 {
        Ok(contract) => panic!("expected a parse error, got {}", contract),
        Err(error) => error,
    }
}

const PROGRAM: &str = r#"contract {
    func add(a int, b int) int {
        return a + b * 2
    }

    func main() {
        int x = add(1, 2)
        if (x > 3) {
            x = x - 1
        } else {
            x = 0
        }
        return
    }
}
"#;

#[test]
fn test_parse_program() {
    let (_, contract) = parse_ok(PROGRAM);

    let expected = "\ncontract {\n\
        func add(Parameter : (Identifier: a, Type: int), Parameter : (Identifier: b, Type: int)) int {\n\
        return (a + (b * 2))\n\
        }\n\
        func main() void {\n\
        int x = function add( 1, 2 )\n\
        if ( (x > 3) ) { x = (x - 1) } else { x = 0 }\n\
        return\n\
        }\n\
        }";

    assert_eq!(contract.to_string(), expected);
}

#[test]
fn test_program_scopes() {
    let (parser, _) = parse_ok(PROGRAM);
    let scopes = parser.scopes();

    assert_eq!(scopes.current(), scopes.root());
    assert_eq!(
        scopes.lookup_local(scopes.root(), "add").map(|symbol| symbol.kind),
        Some(SymbolKind::Function)
    );
    assert!(scopes.lookup_local(scopes.root(), "x").is_none());

    assert_eq!(
        scopes.dump(),
        "scope 0 { add: Function, main: Function }\n  \
         scope 1 { a: Integer, b: Integer }\n    \
         scope 2\n  \
         scope 3\n    \
         scope 4 { x: Integer }\n      \
         scope 5\n      \
         scope 6\n"
    );
}

#[test]
fn test_parse_empty_contract() {
    let (parser, contract) = parse_ok("\n\ncontract {\n}\n\n");

    assert!(contract.functions.is_empty());
    assert_eq!(contract.to_string(), "\ncontract {\n}");
    assert!(parser.scopes().children(parser.scopes().root()).is_empty());
}

#[test]
fn test_parse_semicolons_and_newlines() {
    let (_, contract) = parse_ok("contract { func f() bool { bool a = true; return !a } }");

    assert_eq!(
        contract.to_string(),
        "\ncontract {\nfunc f() bool {\nbool a = true\nreturn (!a)\n}\n}"
    );
}

#[test]
fn test_parse_strings_and_comments() {
    let source = "contract {\n\
        // greeting\n\
        func hello() string {\n\
        string s = \"hi \\\"there\\\"\" // trailing\n\
        return s\n\
        }\n\
        }";
    let (_, contract) = parse_ok(source);

    assert_eq!(
        contract.to_string(),
        "\ncontract {\nfunc hello() string {\nstring s = hi \"there\"\nreturn s\n}\n}"
    );
}

#[test]
fn test_parse_recursion_and_shadowing() {
    let source = r#"contract {
        func fact(n int) int {
            if (n <= 1) {
                return 1
            }
            int n = n - 1
            return n * fact(n)
        }
    }"#;
    let (_, contract) = parse_ok(source);

    assert_eq!(
        contract.to_string(),
        "\ncontract {\nfunc fact(Parameter : (Identifier: n, Type: int)) int {\n\
         if ( (n <= 1) ) { return 1 }\n\
         int n = (n - 1)\n\
         return (n * function fact( n ))\n}\n}"
    );
}

#[test]
fn test_parse_logical_precedence() {
    let source = "contract { func f(a bool, b bool, c int) bool { return a || b && c % 2 == 0 } }";
    let (_, contract) = parse_ok(source);

    assert_eq!(
        contract.to_string(),
        "\ncontract {\nfunc f(Parameter : (Identifier: a, Type: bool), Parameter : (Identifier: b, Type: bool), Parameter : (Identifier: c, Type: int)) bool {\n\
         return (a || (b && ((c % 2) == 0)))\n}\n}"
    );
}

#[test]
fn test_undeclared_symbol() {
    let source = "contract {\n    func main() {\n        x = 1\n    }\n}";
    let error = parse_err(source);

    assert_eq!(error.get_error_name(), "SymbolNotDeclared");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 9);

    assert_eq!(
        format_diagnostic(&error, source, "main.ct"),
        "Error: SymbolNotDeclared (Symbol `x` not declared)\n\
         -> main.ct:3:9\n  \
         |\n\
         3 | x = 1\n  \
         | ^"
    );
}

#[test]
fn test_variable_not_visible_outside_block() {
    let source = "contract {\nfunc main() {\nif (true) {\nint y = 1\n}\nreturn y\n}\n}";
    let error = parse_err(source);

    assert_eq!(error.get_error_name(), "SymbolNotDeclared");
    assert_eq!(error.get_position().line, 6);
    assert_eq!(error.get_position().column, 8);
}

#[test]
fn test_duplicate_declaration() {
    let source = "contract {\nfunc main() {\nint a = 1\nstring a = \"b\"\n}\n}";
    let error = parse_err(source);

    assert_eq!(error.get_error_name(), "SymbolAlreadyDeclared");
    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 8);
}

#[test]
fn test_duplicate_parameter() {
    let error = parse_err("contract { func f(a int, a int) { } }");

    assert_eq!(error.get_error_name(), "SymbolAlreadyDeclared");
    assert_eq!(error.get_tip().to_string(), "Symbol `a` already declared");
}

#[test]
fn test_missing_terminator() {
    let source = "contract {\nfunc f() int {\nreturn 1 2\n}\n}";
    let error = parse_err(source);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "expected `Semicolon`, found `Int (\"2\")`, did you miss a semicolon?"
    );
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 10);
}

#[test]
fn test_unclosed_block() {
    let error = parse_err("contract {\nfunc f() {\nreturn\n");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "expected `Rbrace`, found `Eof`"
    );
}

#[test]
fn test_trailing_tokens_after_contract() {
    let error = parse_err("contract { }\nfunc");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_tip().to_string(), "expected `Eof`, found `Function`");
}

#[test]
fn test_invalid_prefix_operand() {
    let error = parse_err("contract { func f() int { return -true } }");

    assert_eq!(error.get_error_name(), "InvalidPrefixOperand");
    assert_eq!(
        error.get_tip().to_string(),
        "Operator `-` cannot be applied to `true`"
    );
}

#[test]
fn test_statement_call_requires_parentheses() {
    let error = parse_err("contract { func f() { f } }");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_tip().to_string(), "expected `Lparen`, found `Rbrace`");
}

#[test]
fn test_unrecognised_character() {
    let source = "contract {\n  func f() { int a = 1 # 2 }\n}";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        format_diagnostic(&error, source, "main.ct"),
        "Error: UnrecognisedToken\n\
         -> main.ct:2:24\n  \
         |\n\
         2 | func f() { int a = 1 # 2 }\n  \
         | ---------------------^"
    );
}

#[test]
fn test_empty_function_body() {
    let (_, contract) = parse_ok("contract { func foo() void {\n\n} }");

    assert_eq!(contract.to_string(), "\ncontract {\nfunc foo() void {\n\n}\n}");
}

#[test]
fn test_assigned_value_type_not_checked() {
    let source = "contract {\nfunc main() {\nint x = \"hello\"\nbool y = 3\nx = true\n}\n}";
    let (parser, contract) = parse_ok(source);

    assert_eq!(
        contract.to_string(),
        "\ncontract {\nfunc main() void {\nint x = hello\nbool y = 3\nx = true\n}\n}"
    );

    // main's function scope, then its body
    let scopes = parser.scopes();
    let function_scope = scopes.children(scopes.root())[0];
    let body = scopes.children(function_scope)[0];
    assert_eq!(
        scopes.lookup_local(body, "x").map(|symbol| symbol.kind),
        Some(SymbolKind::Integer)
    );
    assert_eq!(
        scopes.lookup_local(body, "y").map(|symbol| symbol.kind),
        Some(SymbolKind::Boolean)
    );
}

#[test]
fn test_only_names_are_called() {
    let error = parse_err("contract {\nfunc f() {\nreturn 1(2)\n}\n}");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_tip().to_string(), "expected `Ident`, found `Lparen`");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 9);

    let error = parse_err("contract {\nfunc f(a int, b int) int {\nreturn (a + b)(1)\n}\n}");
    assert_eq!(error.get_tip().to_string(), "expected `Ident`, found `Lparen`");
}

#[test]
fn test_parses_on_separate_threads() {
    let handles = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("contract {{\nfunc f{i}(a int) int {{\nreturn a * {i}\n}}\n}}");
                run(&source)
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let (parser, contract) = handle.join().unwrap();

        assert_eq!(
            contract.unwrap().to_string(),
            format!(
                "\ncontract {{\nfunc f{i}(Parameter : (Identifier: a, Type: int)) int {{\nreturn (a * {i})\n}}\n}}"
            )
        );
        assert_eq!(
            parser.scopes().dump(),
            format!("scope 0 {{ f{i}: Function }}\n  scope 1 {{ a: Integer }}\n    scope 2\n")
        );
    }
}
