use rect_packer_core::config::Heuristic;
use rect_packer_core::model::Rect;
use rect_packer_core::packer::maxrects::MaxRectsBinPack;

#[test]
fn long_bars_fit_in_either_order() {
    for rot in [false, true] {
        for reqs in [[(90, 10), (10, 90)], [(10, 90), (90, 10)]] {
            let mut p = MaxRectsBinPack::new(100, 100, rot).unwrap();
            let out = p.insert_batch(&reqs, Heuristic::BottomLeft);
            assert_eq!(out.len(), 2);
            let a = out[0].expect("first placed");
            let b = out[1].expect("second placed");
            assert!(!a.intersects(&b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn batch_commits_best_fit_first() {
    // The 30x30 request is a perfect fit for the bin, so best-area-fit takes
    // it first even though it is listed last; the 40x40 then has no room.
    let mut p = MaxRectsBinPack::new(30, 30, false).unwrap();
    let out = p.insert_batch(&[(40, 40), (10, 10), (30, 30)], Heuristic::BestAreaFit);
    assert_eq!(out, vec![None, None, Some(Rect::new(0, 0, 30, 30))]);
    assert_eq!(p.used_rects(), &[Rect::new(0, 0, 30, 30)]);
}

#[test]
fn batch_differs_from_input_order() {
    let reqs = [(10, 10), (30, 30)];

    let mut seq = MaxRectsBinPack::new(30, 30, false).unwrap();
    let in_order: Vec<Option<Rect>> = reqs
        .iter()
        .map(|&(w, h)| seq.insert(w, h, Heuristic::BestAreaFit))
        .collect();
    assert_eq!(in_order[1], None);

    let mut batch = MaxRectsBinPack::new(30, 30, false).unwrap();
    let out = batch.insert_batch(&reqs, Heuristic::BestAreaFit);
    assert_eq!(out, vec![None, Some(Rect::new(0, 0, 30, 30))]);
}

#[test]
fn ties_go_to_lowest_index() {
    let mut p = MaxRectsBinPack::new(64, 64, false).unwrap();
    let out = p.insert_batch(&[(16, 16), (16, 16)], Heuristic::BottomLeft);
    assert_eq!(out[0], Some(Rect::new(0, 0, 16, 16)));
    assert_eq!(out[1], Some(Rect::new(16, 0, 16, 16)));
}

#[test]
fn zero_sized_and_empty_requests() {
    let mut p = MaxRectsBinPack::new(64, 64, true).unwrap();
    assert!(p.insert_batch(&[], Heuristic::ContactPoint).is_empty());
    let out = p.insert_batch(&[(0, 5), (8, 8), (5, 0)], Heuristic::ContactPoint);
    assert_eq!(out, vec![None, Some(Rect::new(0, 0, 8, 8)), None]);
    assert_eq!(p.used_rects().len(), 1);
}

#[test]
fn batch_continues_on_existing_contents() {
    let mut p = MaxRectsBinPack::new(50, 50, false).unwrap();
    p.insert(50, 40, Heuristic::BestShortSideFit).unwrap();
    let out = p.insert_batch(&[(20, 20), (25, 10), (25, 10)], Heuristic::BestShortSideFit);
    assert_eq!(out[0], None);
    assert_eq!(out[1], Some(Rect::new(0, 40, 25, 10)));
    assert_eq!(out[2], Some(Rect::new(25, 40, 25, 10)));
    assert!((p.occupancy() - 1.0).abs() < 1e-6);
}
