use ai_goap::{Condition, NpcOperator, Planner, PlannerHelper, WorldState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BITS: usize = 8;

fn bit_name(i: usize) -> String {
    format!("bit{i}")
}

fn unset_bits(state: &WorldState) -> usize {
    (0..BITS)
        .filter(|&i| state.value::<bool>(&bit_name(i)) != Some(&true))
        .count()
}

fn toy_domain() -> (Vec<NpcOperator>, WorldState) {
    let mut operators = Vec::with_capacity(BITS);
    let mut start = WorldState::new();
    for i in 0..BITS {
        let name = bit_name(i);
        start = start.with_state(name.clone(), false).expect("unique bit");
        let target = name.clone();
        let op = NpcOperator::new(format!("set_{name}"), 1.0, move |s| {
            s.set_value(&target, true).is_ok()
        })
        .expect("valid cost")
        .with_precondition(Condition::equals("unset", name, false));
        operators.push(op);
    }
    (operators, start)
}

fn bench_goap_planner(c: &mut Criterion) {
    let (operators, start) = toy_domain();

    c.bench_function("ai-goap/planner.generate_plan(bits=8)", |b| {
        b.iter(|| {
            let mut helper = PlannerHelper::new(
                |s| unset_bits(s) as f32,
                |s| unset_bits(s) == 0,
            );
            for op in &operators {
                helper.add_operator(op).expect("unique operator");
            }
            helper.set_current_state(black_box(&start));
            let mut planner = Planner::new(helper);
            let result = planner.generate_plan().expect("search ran");
            black_box((result, planner.plan().len()));
        })
    });
}

criterion_group!(benches, bench_goap_planner);
criterion_main!(benches);
