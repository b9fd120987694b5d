use radix_calc::{init_logger, Batch, BatchError, Operator};

const INPUT: &str = "7
< 98765432109876543210 123456789
+ 98765432109876543210 123456789
- 98765432109876543210 123456789
- 123456789 98765432109876543210
* 98765432109876543210 123456789
/ 98765432109876543210 123456789
# 98765432109876543210 123456789 3
";

#[test]
fn evaluates_every_operator() {
    init_logger(true);
    let batch = Batch::parse(INPUT).unwrap();
    assert_eq!(batch.records().len(), 7);
    assert_eq!(batch.records()[6].operator, Operator::Sharp(3));
    assert_eq!(
        batch.execute().unwrap(),
        vec![
            "-1",
            "98765432109999999999",
            "98765432109753086421",
            "0",
            "12193263112482853211126352690",
            "800000007370 8280",
            "12193263112482853211126",
        ]
    );
}

#[test]
fn operands_use_base_100_chunks() {
    let batch = Batch::parse("1 + 00012345 0").unwrap();
    assert_eq!(batch.records()[0].left.digits(), &[45, 23, 1]);
    assert_eq!(batch.execute().unwrap(), vec!["12345"]);
}

#[test]
fn first_failure_stops_the_batch() {
    let batch = Batch::parse("3 + 1 1 # 12 3 2 * 2 2").unwrap();
    match batch.execute() {
        Err(BatchError::Arithmetic { record, .. }) => assert_eq!(record, 2),
        other => panic!("unexpected result {:?}", other),
    }
}
