use ipay_tokly::application::orchestrator::PaymentOrchestrator;
use ipay_tokly::application::signer::sign;
use ipay_tokly::domain::document::CorrelationPayload;
use ipay_tokly::domain::money::MinorUnits;
use ipay_tokly::domain::order::{OrderId, OrderStatus};
use ipay_tokly::infrastructure::in_memory::{
    InMemoryConfigStore, InMemoryOrderSystem, MemoryNoticeSink,
};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

mod common;
use common::{RecordingGateway, Reply, merchant_config, order};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_payments_do_not_share_state() {
    let gateway = RecordingGateway::new(Reply::UrlPerOrder);
    let orders = InMemoryOrderSystem::new();

    let mut rng = rand::thread_rng();
    let mut totals = HashMap::new();
    for id in 1..=50u64 {
        let total = Decimal::new(rng.gen_range(1..10_000_000), 2);
        totals.insert(id, total);
        orders.insert(order(id, total)).await;
    }

    let orchestrator = Arc::new(PaymentOrchestrator::new(
        Box::new(gateway.clone()),
        Box::new(orders.clone()),
        Box::new(InMemoryConfigStore::new()),
        Box::new(MemoryNoticeSink::new()),
    ));
    let cfg = Arc::new(merchant_config());

    let handles: Vec<_> = totals
        .iter()
        .map(|(&id, &total)| {
            let orchestrator = Arc::clone(&orchestrator);
            let cfg = Arc::clone(&cfg);
            tokio::spawn(async move {
                let outcome = orchestrator.create_payment(&order(id, total), &cfg).await;
                (id, outcome.redirect_url().map(str::to_string))
            })
        })
        .collect();

    for handle in handles {
        let (id, url) = handle.await.unwrap();
        assert_eq!(url, Some(format!("https://pay.example/{id}")));
        assert_eq!(orders.status(OrderId(id)).await, Some(OrderStatus::OnHold));
        assert_eq!(orders.history(OrderId(id)).await.len(), 1);
    }

    let sent = gateway.sent().await;
    assert_eq!(sent.len(), totals.len());

    let mut salts = HashSet::new();
    for doc in &sent {
        let tx = &doc.transactions[0];
        let id = CorrelationPayload::parse(&tx.info).unwrap().order_id.0;
        assert_eq!(tx.amount, MinorUnits::from_major(totals[&id]).unwrap());
        assert_eq!(tx.desc, format!("Order #{id}"));
        assert_eq!(doc.auth.sign, sign(&doc.auth.salt, &cfg.sign_key).unwrap());
        assert!(salts.insert(doc.auth.salt.clone()), "salt reused");
    }
}
