use uri_parts::{ResolveErrorKind, Uri};

trait Test {
    fn pass(&self, reference: &str, expected: &str);
}

impl Test for Uri {
    #[track_caller]
    fn pass(&self, reference: &str, expected: &str) {
        let reference = Uri::parse(reference).unwrap();
        let target = reference.resolve_relative(self).unwrap();
        assert_eq!(target.recompose().unwrap(), expected);
    }
}

#[test]
fn resolve_normal() {
    // Examples from Section 5.4.1 of RFC 3986.
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();

    base.pass("g:h", "g:h");
    base.pass("g", "http://a/b/c/g");
    base.pass("./g", "http://a/b/c/g");
    base.pass("g/", "http://a/b/c/g/");
    base.pass("/g", "http://a/g");
    base.pass("//g", "http://g");
    base.pass("?y", "http://a/b/c/d;p?y");
    base.pass("g?y", "http://a/b/c/g?y");
    base.pass("#s", "http://a/b/c/d;p?q#s");
    base.pass("g#s", "http://a/b/c/g#s");
    base.pass("g?y#s", "http://a/b/c/g?y#s");
    base.pass(";x", "http://a/b/c/;x");
    base.pass("g;x", "http://a/b/c/g;x");
    base.pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    base.pass("", "http://a/b/c/d;p?q");
    base.pass(".", "http://a/b/c/");
    base.pass("./", "http://a/b/c/");
    base.pass("..", "http://a/b/");
    base.pass("../", "http://a/b/");
    base.pass("../g", "http://a/b/g");
    base.pass("../..", "http://a/");
    base.pass("../../", "http://a/");
    base.pass("../../g", "http://a/g");
}

#[test]
fn resolve_abnormal() {
    // Examples from Section 5.4.2 of RFC 3986.
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();

    base.pass("../../../g", "http://a/g");
    base.pass("../../../../g", "http://a/g");

    base.pass("/./g", "http://a/g");
    base.pass("/../g", "http://a/g");
    base.pass("g.", "http://a/b/c/g.");
    base.pass(".g", "http://a/b/c/.g");
    base.pass("g..", "http://a/b/c/g..");
    base.pass("..g", "http://a/b/c/..g");

    base.pass("./../g", "http://a/b/g");
    base.pass("./g/.", "http://a/b/c/g/");
    base.pass("g/./h", "http://a/b/c/g/h");
    base.pass("g/../h", "http://a/b/c/h");
    base.pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    base.pass("g;x=1/../y", "http://a/b/c/y");

    base.pass("g?y/./x", "http://a/b/c/g?y/./x");
    base.pass("g?y/../x", "http://a/b/c/g?y/../x");
    base.pass("g#s/./x", "http://a/b/c/g#s/./x");
    base.pass("g#s/../x", "http://a/b/c/g#s/../x");

    // A strict parser keeps the reference's scheme even when it equals
    // the base's.
    base.pass("http:g", "http:g");
}

#[test]
fn resolve_merges_below_root() {
    // A base with an authority and an empty path.
    let base = Uri::parse("http://h").unwrap();
    base.pass("g", "http://h/g");
    base.pass("g/x", "http://h/g/x");

    // A slashless base path contributes nothing to the merge.
    let base = Uri::parse("mailto:john").unwrap();
    base.pass("doe", "mailto:doe");
}

#[test]
fn resolve_query_inheritance() {
    let base = Uri::parse("http://a/b?bq").unwrap();

    // An empty reference path keeps the base path; the base query is
    // inherited only when the reference carries none.
    base.pass("", "http://a/b?bq");
    base.pass("?rq", "http://a/b?rq");
    base.pass("#f", "http://a/b?bq#f");

    // A non-empty reference path never inherits the base query.
    base.pass("c", "http://a/c");
    base.pass("/c", "http://a/c");
    base.pass("c?rq", "http://a/c?rq");
}

#[test]
fn resolve_fragment_from_reference() {
    let base = Uri::parse("http://a/b#bf").unwrap();

    // The base fragment never propagates.
    base.pass("", "http://a/b");
    base.pass("c", "http://a/c");
    base.pass("g:h", "g:h");
    base.pass("c#rf", "http://a/c#rf");
}

#[test]
fn resolve_dot_segments_in_absolute_reference() {
    let base = Uri::parse("http://a/b").unwrap();

    // Branches with a scheme or authority still strip dot segments.
    base.pass("g:/a/./b/../c", "g:/a/c");
    base.pass("//h/a/./b", "http://h/a/b");
}

#[test]
fn resolve_requires_base_scheme() {
    let base = Uri::parse("//a/b").unwrap();
    let reference = Uri::parse("g").unwrap();
    let e = reference.resolve_relative(&base).unwrap_err();
    assert_eq!(e.kind(), ResolveErrorKind::MissingBaseScheme);
}

#[test]
fn resolve_does_not_alias() {
    let base = Uri::parse("http://h/a/b?q").unwrap();
    let reference = Uri::parse("?r").unwrap();
    let mut target = reference.resolve_relative(&base).unwrap();

    target.authority.as_mut().unwrap().host = Some("other".to_owned());
    assert_eq!(base.authority.as_ref().unwrap().host.as_deref(), Some("h"));
    assert_eq!(base.recompose().unwrap(), "http://h/a/b?q");
}
