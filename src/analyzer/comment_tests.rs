use super::*;

fn lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}

fn target_of(lines: &[&str], needle: &str) -> usize {
    lines
        .iter()
        .position(|l| l.contains(needle))
        .expect("needle present")
}

#[test]
fn single_line_block_directly_above() {
    let src = lines("  /** Current total. */\n  readonly total = computed(() => 1);");
    let block = locate_comment_block(&src, 1).unwrap();

    assert_eq!(block.kind, BlockKind::SingleLine);
    assert_eq!((block.start, block.end), (0, 0));
    assert_eq!(block.raw_text, "  /** Current total. */");
    assert_eq!(block.inner_text(), "Current total.");
}

#[test]
fn multi_line_block_with_stars() {
    let src = lines(
        "class A {\n  /**\n   * Adds.\n   * @param {number} a first\n   */\n  add(a: number): number {",
    );
    let target = target_of(&src, "add(");
    let block = locate_comment_block(&src, target).unwrap();

    assert_eq!(block.kind, BlockKind::MultiLine);
    assert_eq!((block.start, block.end), (1, 4));
    assert!(block.raw_text.contains("@param {number} a"));
}

#[test]
fn blank_lines_between_block_and_declaration_are_skipped() {
    let src = lines("/** Doc. */\n\n\nfoo(): void {");
    let block = locate_comment_block(&src, 3).unwrap();
    assert_eq!(block.start, 0);
}

#[test]
fn decorators_between_block_and_declaration_are_skipped() {
    let src = lines(
        "  /**\n   * Handles resize.\n   */\n  @HostListener('window:resize', ['$event'])\n\n  onResize(event: Event): void {",
    );
    let target = target_of(&src, "onResize");
    let block = locate_comment_block(&src, target).unwrap();
    assert_eq!((block.start, block.end), (0, 2));
}

#[test]
fn brace_decorator_is_skipped() {
    let src = lines("/** Doc. */\n@Memoize({ ttl: 5 })\nload(): void {");
    assert!(locate_comment_block(&src, 2).is_some());
}

#[test]
fn code_between_block_and_declaration_breaks_association() {
    let src = lines("/** Doc. */\nconst x = 1;\nfoo(): void {");
    assert!(locate_comment_block(&src, 2).is_none());
}

#[test]
fn separated_blocks_are_each_unassociated() {
    let src = lines(
        "/** First. */\nlet a = 1;\nfirst(): void {\n}\n/**\n * Second.\n */\nlet b = 2;\nsecond(): void {",
    );
    assert!(locate_comment_block(&src, target_of(&src, "first(")).is_none());
    assert!(locate_comment_block(&src, target_of(&src, "second(")).is_none());
}

#[test]
fn nothing_above_first_line() {
    let src = lines("foo(): void {");
    assert!(locate_comment_block(&src, 0).is_none());
}

#[test]
fn only_blank_lines_above() {
    let src = lines("\n\n  \nfoo(): void {");
    assert!(locate_comment_block(&src, 3).is_none());
}

#[test]
fn plain_block_comment_is_not_documentation() {
    let src = lines("/*\n * Not a doc block.\n */\nfoo(): void {");
    assert!(locate_comment_block(&src, 3).is_none());
}

#[test]
fn plain_single_line_block_comment_is_not_documentation() {
    let src = lines("/* note */\nfoo(): void {");
    assert!(locate_comment_block(&src, 1).is_none());
}

#[test]
fn line_comment_is_not_documentation() {
    let src = lines("// helper\nfoo(): void {");
    assert!(locate_comment_block(&src, 1).is_none());
}

#[test]
fn empty_block_marker_is_not_single_line_doc() {
    let src = lines("/**/\nfoo(): void {");
    assert!(locate_comment_block(&src, 1).is_none());
}

#[test]
fn closing_line_without_opener_is_rejected() {
    let src = lines(" * dangling\n */\nfoo(): void {");
    assert!(locate_comment_block(&src, 2).is_none());
}

#[test]
fn earlier_block_tail_stops_the_walk() {
    // The lines above `*/` belong to a finished block, not to an opener.
    let src = lines("/** a */\n * orphan\n */\nfoo(): void {");
    assert!(locate_comment_block(&src, 3).is_none());
}

#[test]
fn unclosed_opener_above_declaration_is_rejected() {
    let src = lines("/** never closed\nfoo(): void {");
    assert!(locate_comment_block(&src, 1).is_none());
}

#[test]
fn unstarred_tag_lines_are_not_decorators() {
    let src = lines("/**\n@param {string} name the name\n@returns {void}\n*/\ngreet(name: string): void {");
    let block = locate_comment_block(&src, 4).unwrap();
    assert_eq!((block.start, block.end), (0, 3));
}

#[test]
fn decorator_like_line_inside_open_comment_stops_the_scan() {
    // `@Input(` sits inside an unterminated plain comment, so it is not skipped.
    let src = lines("/* start\n@Input()\nvalue = input(0);");
    assert!(locate_comment_block(&src, 2).is_none());
}

#[test]
fn comment_opener_inside_string_does_not_open_a_comment() {
    let src = lines("const glob = 'src/**';\n/** Doc. */\n@Input()\nvalue = input(0);");
    let block = locate_comment_block(&src, 3).unwrap();
    assert_eq!(block.start, 1);
}

#[test]
fn crlf_trimmed_lines_are_handled() {
    let src = vec!["/**\r", " * Doc.\r", " */\r", "foo(): void {\r"];
    let block = locate_comment_block(&src, 3).unwrap();
    assert_eq!((block.start, block.end), (0, 2));
}

#[test]
fn locate_is_idempotent() {
    let src = lines("/**\n * Doc.\n */\nfoo(): void {");
    let locator = CommentBlockLocator::new(&src);
    assert_eq!(locator.locate(3), locator.locate(3));
    assert_eq!(locator.locate(3), locate_comment_block(&src, 3));
}

#[test]
fn target_past_end_is_clamped() {
    let src = lines("/** Doc. */");
    assert!(locate_comment_block(&src, 10).is_some());
}
