use typemaths::lexer::{Token, TokenizeError, Tokenizer, expression_tokenizer, filter_whitespace};

fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_str()).collect()
}

#[test]
fn lex_identifiers_and_numbers() {
    let tokens = expression_tokenizer().tokenize("foo_1 42 3.5e-2").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec!["identifier", "whitespace", "number", "whitespace", "number"]
    );
    assert_eq!(tokens[0].text, "foo_1");
    assert_eq!(tokens[2].text, "42");
    assert_eq!(tokens[4].text, "3.5e-2");
}

#[test]
fn lex_operators_and_punctuation() {
    let tokens = filter_whitespace(expression_tokenizer().tokenize("+ - * / % ^ ( ) ,").unwrap());
    assert_eq!(
        kinds(&tokens),
        vec![
            "operator", "operator", "operator", "operator", "operator", "operator", "lparen",
            "rparen", "comma"
        ]
    );
}

#[test]
fn lex_double_star_as_one_operator() {
    let tokens = expression_tokenizer().tokenize("2**3").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Token::new("operator", "**"));
}

#[test]
fn lex_keeps_whitespace_until_filtered() {
    let tokens = expression_tokenizer().tokenize(" 1 +\t2 ").unwrap();
    assert_eq!(tokens.len(), 7);
    assert!(tokens[0].is("whitespace"));

    let tokens = filter_whitespace(tokens);
    assert_eq!(kinds(&tokens), vec!["number", "operator", "number"]);
}

#[test]
fn lex_empty_input() {
    assert!(expression_tokenizer().tokenize("").unwrap().is_empty());
}

#[test]
fn lex_rejects_unknown_character() {
    let err = expression_tokenizer().tokenize("1 + $").unwrap_err();
    match err {
        TokenizeError::NoMatch { position, found } => {
            assert_eq!(position, 4);
            assert_eq!(found, "$");
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }
}

#[test]
fn first_declared_rule_wins() {
    // "if" matches both rules; declaration order decides
    let keyword_first = Tokenizer::new([("keyword", "if"), ("word", "[a-z]+")]).unwrap();
    let word_first = Tokenizer::new([("word", "[a-z]+"), ("keyword", "if")]).unwrap();

    assert_eq!(keyword_first.tokenize("if").unwrap()[0].kind, "keyword");
    assert_eq!(word_first.tokenize("if").unwrap()[0].kind, "word");

    // priority, not length: "iffy" becomes "if" + "fy"
    let tokens = keyword_first.tokenize("iffy").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0], Token::new("keyword", "if"));
    assert_eq!(tokens[1], Token::new("word", "fy"));
}

#[test]
fn rules_are_anchored_to_the_scan_position() {
    let tokenizer = Tokenizer::new([("digits", "[0-9]+")]).unwrap();
    assert!(tokenizer.tokenize("a1").is_err());
}

#[test]
fn empty_matches_do_not_count() {
    let tokenizer = Tokenizer::new([("maybe", "a*"), ("b", "b")]).unwrap();
    let tokens = tokenizer.tokenize("aab").unwrap();
    assert_eq!(kinds(&tokens), vec!["maybe", "b"]);
}

#[test]
fn invalid_pattern_is_reported() {
    let err = Tokenizer::new([("broken", "(")]).err().unwrap();
    assert!(matches!(err, TokenizeError::InvalidPattern { ref rule, .. } if rule == "broken"));
}

#[test]
fn rule_names_keep_declaration_order() {
    let names: Vec<_> = expression_tokenizer().rule_names().collect();
    assert_eq!(
        names,
        vec!["identifier", "number", "operator", "lparen", "rparen", "comma", "whitespace"]
    );
}
