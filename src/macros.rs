#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a [`Celebration`](crate::celebration::Celebration).
///
/// `rank`, `precedence`, `colors` and `origin` take bare variant names. Omitted
/// fields default to: origin `General`, no obligation, suppression as implied
/// by the rank, transfer `Following`, no title.
#[macro_export]
macro_rules! celebration {
    (
        id: $id:expr,
        date: $date:expr,
        rank: $rank:ident,
        precedence: $precedence:ident,
        colors: [ $($color:ident),* $(,)? ]
        $(, origin: $origin:ident)?
        $(, obligation: $obligation:expr)?
        $(, suppresses: $suppresses:expr)?
        $(, transfer: $transfer:ident)?
        $(, title: $title:expr)?
        $(,)?
    ) => {{
        let rank = $crate::celebration::Rank::$rank;
        $crate::celebration::Celebration {
            id: ::std::borrow::Cow::Borrowed($id),
            date_rule: $date,
            rank,
            precedence: $crate::celebration::Precedence::$precedence,
            colors: vec![ $($crate::celebration::Color::$color),* ],
            origin: Option::<$crate::celebration::Origin>::None
                $(.or(Some($crate::celebration::Origin::$origin)))?
                .unwrap_or($crate::celebration::Origin::General),
            is_holy_day_of_obligation: false $(|| $obligation)?,
            suppresses_lower_ranks: Option::<bool>::None
                $(.or(Some($suppresses)))?
                .unwrap_or(rank.suppresses_by_default()),
            transfer: Option::<$crate::celebration::TransferRule>::None
                $(.or(Some($crate::celebration::TransferRule::$transfer)))?
                .unwrap_or_default(),
            title: Option::<::std::borrow::Cow<'static, str>>::None
                $(.or(Some(::std::borrow::Cow::Borrowed($title))))?,
        }
    }};
}
