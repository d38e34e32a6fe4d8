//! end-to-end recovery scenarios

use num_bigint::BigInt;
use unshard::{lagrange_at, recover, BadShares, Combinations, Error, InputSet, Share};

fn share(x: i64, y: i64) -> Share {
    Share::new(x, BigInt::from(y))
}

// f(x) = 42 + 7x + 3x^2
fn clean_shares() -> Vec<Share> {
    vec![share(1, 52), share(2, 68), share(3, 90)]
}

#[test]
fn clean_bundle_recovers_secret() {
    let set = InputSet::new(3, 3, clean_shares()).unwrap();
    let report = recover(&set).unwrap();
    assert_eq!(report.secret, Some(BigInt::from(42)));
    assert_eq!(report.bad_shares, BadShares::Xs(vec![]));
    assert_eq!((report.agree, report.total), (3, 3));
    assert_eq!(
        report.to_string(),
        "secret: 42\nbad_shares: []\naccuracy: 3 / 3 (100.00%)"
    );
}

#[test]
fn one_corrupted_share_is_flagged() {
    let mut shares = clean_shares();
    shares.push(share(4, 999)); // true value would be 118
    let set = InputSet::new(4, 3, shares).unwrap();
    let report = recover(&set).unwrap();
    assert_eq!(report.secret, Some(BigInt::from(42)));
    assert_eq!(report.bad_shares, BadShares::Xs(vec![4]));
    assert_eq!((report.agree, report.total), (3, 4));
    assert_eq!(
        report.to_string(),
        "secret: 42\nbad_shares: [4]\naccuracy: 3 / 4 (75.00%)"
    );
}

#[test]
fn insufficient_shares_is_fatal() {
    // declared n = 5, but only two shares decoded
    let err = InputSet::new(5, 3, vec![share(1, 52), share(2, 68)]).unwrap_err();
    assert_eq!(err, Error::InsufficientShares { have: 2, need: 3 });
}

#[test]
fn mutually_inconsistent_bundle_is_undetermined() {
    // points of y = (x + 1) / 2: every 2-subset interpolates to a line
    // with non-integer intercept, so no candidate survives
    let shares = vec![share(1, 1), share(3, 2), share(5, 3)];
    let set = InputSet::new(3, 2, shares).unwrap();
    let report = recover(&set).unwrap();
    assert_eq!(report.secret, None);
    assert_eq!(report.bad_shares, BadShares::All);
    assert_eq!((report.agree, report.total), (0, 3));
    assert_eq!(
        report.to_string(),
        "secret: UNDETERMINED\nbad_shares: ALL\naccuracy: 0 / 3 (0.00%)"
    );
}

#[test]
fn search_is_deterministic() {
    let mut shares = clean_shares();
    shares.push(share(4, 999));
    shares.push(share(5, 123));
    let set = InputSet::new(5, 3, shares).unwrap();
    let first = recover(&set).unwrap();
    let second = recover(&set).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tie_break_keeps_first_enumerated_subset() {
    // two disjoint consistent pairs: lines y = x (shares 1, 2) and
    // y = 10x + 100 (shares 3, 4). each pair agrees with exactly 2 shares,
    // so the subset {0, 1} enumerated first must win.
    let shares = vec![share(1, 1), share(2, 2), share(3, 130), share(4, 140)];
    let set = InputSet::new(4, 2, shares).unwrap();
    let report = recover(&set).unwrap();
    assert_eq!(report.secret, Some(BigInt::from(0)));
    assert_eq!(report.bad_shares, BadShares::Xs(vec![3, 4]));
    assert_eq!((report.agree, report.total), (2, 4));
}

#[test]
fn selection_is_agreement_maximal() {
    // brute-force the max agreement independently and compare
    let shares = vec![
        share(1, 52),
        share(2, 68),
        share(3, 90),
        share(4, 999),
        share(5, 152),
        share(6, 30),
    ];
    let set = InputSet::new(6, 3, shares.clone()).unwrap();
    let report = recover(&set).unwrap();

    let mut max_agree = 0;
    for subset in Combinations::new(shares.len(), 3) {
        let points: Vec<(i64, BigInt)> = subset
            .iter()
            .map(|&i| (shares[i].x, shares[i].y.clone()))
            .collect();
        if !lagrange_at(&points, 0).unwrap().is_integer() {
            continue;
        }
        let agree = shares
            .iter()
            .filter(|s| {
                lagrange_at(&points, s.x).unwrap().as_integer() == Some(&s.y)
            })
            .count();
        max_agree = max_agree.max(agree);
    }
    assert_eq!(report.agree, max_agree);
    // shares 1, 2, 3, 5 all lie on 42 + 7x + 3x^2 (f(5) = 152)
    assert_eq!(report.secret, Some(BigInt::from(42)));
    assert_eq!(report.bad_shares, BadShares::Xs(vec![4, 6]));
}

#[test]
fn zero_threshold_means_zero_polynomial() {
    // the empty subset interpolates to the zero polynomial, so only
    // zero-valued shares can agree
    let shares = vec![share(1, 0), share(2, 5)];
    let set = InputSet::new(2, 0, shares).unwrap();
    let report = recover(&set).unwrap();
    assert_eq!(report.secret, Some(BigInt::from(0)));
    assert_eq!(report.bad_shares, BadShares::Xs(vec![2]));
    assert_eq!((report.agree, report.total), (1, 2));
}

#[test]
fn duplicate_x_surfaces_division_by_zero() {
    let shares = vec![share(1, 52), share(1, 53), share(2, 68)];
    let set = InputSet::new(3, 2, shares).unwrap();
    assert_eq!(recover(&set).unwrap_err(), Error::DivisionByZero);
}

#[test]
fn big_values_stay_exact() {
    // f(x) = s + x with a secret far beyond u128
    let s: BigInt = BigInt::from(1) << 300;
    let shares: Vec<Share> = (1..=3)
        .map(|x| Share::new(x, &s + BigInt::from(x)))
        .collect();
    let set = InputSet::new(3, 2, shares).unwrap();
    let report = recover(&set).unwrap();
    assert_eq!(report.secret, Some(s));
    assert_eq!(report.bad_shares, BadShares::Xs(vec![]));
}
