use std::sync::Arc;
use std::thread;

use nebula_core::{completion_velocity, Command, StageId, StageStatus};
use nebula_store::{InMemoryStore, Store};

#[test]
fn readers_always_see_whole_snapshots() {
    let store = Arc::new(InMemoryStore::default());
    let ids = ["ideation", "storyboard", "render", "mix", "qc"];

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for round in 0..50 {
                let status = if round % 2 == 0 { StageStatus::Blocked } else { StageStatus::Done };
                for id in ids {
                    store.dispatch(Command::SetStageStatus { stage: StageId::new(id), status }).unwrap();
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snap = store.snapshot().unwrap();
                    let a = completion_velocity(&snap.stages).percent;
                    let b = completion_velocity(&snap.stages).percent;
                    assert_eq!(a, b);
                    assert_eq!(snap.stages.len(), 5);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }

    let last = store.snapshot().unwrap();
    assert!(last.stages.iter().all(|s| s.status == StageStatus::Done));
    assert_eq!(store.revision().unwrap(), 250);
}
