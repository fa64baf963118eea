use petclinic::domain::repositories::VetRepository;
use petclinic::infrastructure::persistence::PgVetRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_with_specialties(pool: PgPool) {
    let repo = PgVetRepository::new(Arc::new(pool));

    let vets = repo.find_all().await.unwrap();

    assert_eq!(vets.len(), 6);
    let carter = vets.iter().find(|v| v.id == 1).unwrap();
    assert_eq!(carter.nr_of_specialties(), 0);
    let douglas = vets.iter().find(|v| v.id == 3).unwrap();
    let names: Vec<_> = douglas.specialties().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["dentistry", "surgery"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_is_stable(pool: PgPool) {
    let repo = PgVetRepository::new(Arc::new(pool));

    let first = repo.find_all().await.unwrap();
    let second = repo.find_all().await.unwrap();

    assert_eq!(first, second);
}
