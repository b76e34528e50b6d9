/// Build a [`Rule`](crate::Rule).
///
/// Three shapes are accepted:
///
/// ```text
/// rule! { name: "...", literal: "exact input", then: "output" }
/// rule! { name: "...", pattern: r"template", [case_sensitive: bool,] [buckets: mask,] then: "output" }
/// rule! { name: "...", pattern: r"template", [case_sensitive: bool,] [buckets: mask,] prod: |caps| expr }
/// ```
///
/// Pattern rules are case-insensitive unless `case_sensitive: true` is given.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        literal: $literal:expr,
        then: $out:expr
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            matcher: $crate::Matcher::Literal($literal),
            handler: $crate::Handler::Constant($out),
            buckets: $crate::BucketMask::empty(),
        }
    }};
    (
        name: $name:expr,
        pattern: $pat:expr
        $(, case_sensitive: $cs:expr)?
        $(, buckets: $buckets:expr)?
        , then: $out:expr
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            matcher: $crate::Matcher::Template { source: $pat, case_insensitive: !{ false $(|| $cs)? } },
            handler: $crate::Handler::Constant($out),
            buckets: $crate::BucketMask::empty() $(.union($buckets))?,
        }
    }};
    (
        name: $name:expr,
        pattern: $pat:expr
        $(, case_sensitive: $cs:expr)?
        $(, buckets: $buckets:expr)?
        , prod: |$caps:ident| $body:expr
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            matcher: $crate::Matcher::Template { source: $pat, case_insensitive: !{ false $(|| $cs)? } },
            handler: $crate::Handler::Computed(Box::new(move |$caps: &$crate::Captures<'_>| -> String { $body })),
            buckets: $crate::BucketMask::empty() $(.union($buckets))?,
        }
    }};
}
