use tyger::diagnostics::SourceMap;
use tyger::lexer::lex;

#[test]
fn byte_to_pos_is_one_indexed() {
    let map = SourceMap::from_source("var x = 1;");
    let pos = map.byte_to_pos(0);
    assert_eq!((pos.line, pos.col), (1, 1));
}

#[test]
fn byte_to_pos_crosses_lines() {
    let source = "var x = 1;\nvar y = 2;\n";
    let map = SourceMap::from_source(source);

    let pos = map.byte_to_pos(11);
    assert_eq!((pos.line, pos.col), (2, 1));

    let pos = map.byte_to_pos(15);
    assert_eq!((pos.line, pos.col), (2, 5));
}

#[test]
fn token_offsets_translate_to_lines() {
    let source = "var x = 1;\nprintln(x);\n";
    let map = SourceMap::from_source(source);

    let lines: Vec<usize> = lex(source)
        .iter()
        .map(|t| map.byte_to_pos(t.pos.offset).line)
        .collect();

    // var x = 1 ; | println ( x ) ; | eof on the trailing line
    assert_eq!(lines, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3]);
}
