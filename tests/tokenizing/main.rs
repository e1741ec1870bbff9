use templatetoken::{
    base::location::SourceLocation,
    lexical::{
        token::{Token, TokenKind},
        tokenizer::Tokenizer,
        ErrorKind,
    },
};

#[test]
fn tokenizing_release_notes() {
    let source = include_str!("./release_notes.tpl");

    let tokens = templatetoken::tokenize(source).expect("Failed to tokenize");

    assert_eq!(
        tokens.clone().dissolve(),
        vec![
            Token::literal("Released "),
            Token::interpolation("version"),
            Token::literal(" on "),
            Token::interpolation("date"),
            Token::literal(" for $"),
            Token::interpolation("price"),
            Token::literal(".\nThanks, "),
            Token::interpolation("author"),
            Token::literal("! Cheers from "),
            Token::interpolation("author"),
            Token::literal(".\n"),
        ]
    );
    assert_eq!(
        tokens.interpolation_names(),
        vec!["version", "date", "price", "author"]
    );
    assert_eq!(tokens.to_template(), source);
}

#[test]
fn tokenizing_invalid() {
    let source = include_str!("./invalid.tpl");
    let location = SourceLocation::new("invalid.tpl", 1, 1);

    let err = Tokenizer::with_location(location.clone())
        .parse(source)
        .expect_err("Expecting tokenizing failure");

    assert_eq!(err.kind(), ErrorKind::UnterminatedInterpolation);
    assert_eq!(err.template(), source);
    assert_eq!(err.location(), Some(&location));

    let rendered = err.to_string();
    assert!(rendered.contains("Unterminated '${'. Expected '}'"));
    assert!(rendered.contains("invalid.tpl:1:1"));
}

#[test]
fn tokenizing_documented_cases() {
    let tokenizer: Tokenizer = Tokenizer::default();

    let shape = |template: &str| {
        tokenizer
            .parse(template)
            .expect("Failed to tokenize")
            .iter()
            .map(|token| (token.kind(), token.value().to_string()))
            .collect::<Vec<_>>()
    };

    assert_eq!(shape(""), vec![(TokenKind::Literal, String::new())]);
    assert_eq!(shape("$$"), vec![(TokenKind::Literal, "$".to_string())]);
    assert_eq!(
        shape("${a}${b}"),
        vec![
            (TokenKind::Literal, String::new()),
            (TokenKind::Interpolation, "a".to_string()),
            (TokenKind::Literal, String::new()),
            (TokenKind::Interpolation, "b".to_string()),
            (TokenKind::Literal, String::new()),
        ]
    );

    for (template, kind) in [
        ("abc$", ErrorKind::UnterminatedEscape),
        ("abc$x", ErrorKind::UnterminatedEscape),
        ("abc${def", ErrorKind::UnterminatedInterpolation),
        ("abc${}def", ErrorKind::EmptyInterpolationName),
    ] {
        let err = tokenizer.parse(template).expect_err(template);
        assert_eq!(err.kind(), kind);
        assert!(err.location().is_none());
    }
}

#[test]
fn tokenizing_across_threads() {
    let tokenizer = Tokenizer::with_location(SourceLocation::new("shared.tpl", 2, 4));

    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|i| {
                let tokenizer = &tokenizer;
                scope.spawn(move || tokenizer.parse(&format!("job ${{worker{i}}}")))
            })
            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let tokens = handle.join().unwrap().expect("Failed to tokenize");
            assert_eq!(tokens[1].value(), format!("worker{i}"));
        }
    });
}
