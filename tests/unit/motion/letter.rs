use super::*;

#[test]
fn glyphs_round_trip_through_from_str_and_serde() {
    assert_eq!(Letter::ALL.len(), 47);
    for &letter in Letter::ALL {
        assert_eq!(letter.as_str().parse::<Letter>().unwrap(), letter);
        let json = serde_json::to_string(&letter).unwrap();
        assert_eq!(json, format!("\"{}\"", letter.as_str()));
        assert_eq!(serde_json::from_str::<Letter>(&json).unwrap(), letter);
    }
    assert!("Q-".parse::<Letter>().is_err());
}

#[test]
fn letter_types_partition_the_alphabet() {
    let count = |t: LetterType| Letter::ALL.iter().filter(|l| l.letter_type() == t).count();
    assert_eq!(count(LetterType::Type1), 22);
    assert_eq!(count(LetterType::Type2), 8);
    assert_eq!(count(LetterType::Type3), 8);
    assert_eq!(count(LetterType::Type4), 3);
    assert_eq!(count(LetterType::Type5), 3);
    assert_eq!(count(LetterType::Type6), 3);
}

#[test]
fn hybrids_are_type1() {
    for &letter in Letter::ALL.iter().filter(|l| l.is_hybrid()) {
        assert_eq!(letter.letter_type(), LetterType::Type1);
    }
}

#[test]
fn beta_groups_cover_the_repositioned_letters() {
    assert_eq!(Letter::G.beta_group(), Some(BetaLetterGroup::GH));
    assert_eq!(Letter::H.beta_group(), Some(BetaLetterGroup::GH));
    assert_eq!(Letter::L.beta_group(), Some(BetaLetterGroup::JKL));
    assert_eq!(Letter::ZDash.beta_group(), Some(BetaLetterGroup::YZDash));
    assert_eq!(Letter::PsiDash.beta_group(), Some(BetaLetterGroup::PsiDash));
    assert_eq!(Letter::A.beta_group(), None);
    assert_eq!(Letter::Sigma.beta_group(), None);
}

#[test]
fn pure_rotation_letters() {
    let pure: Vec<&str> = Letter::ALL
        .iter()
        .filter(|l| l.is_pure_rotation())
        .map(|l| l.as_str())
        .collect();
    assert_eq!(pure, vec!["Φ-", "Ψ-", "Λ-", "α", "β", "Γ"]);
}
