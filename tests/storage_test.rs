use portfolio_backend::models::articles::CreateArticle;
use portfolio_backend::models::biodata::CreateBiodata;
use portfolio_backend::models::contact_messages::CreateContactMessage;
use portfolio_backend::models::skills::{CreateSkill, UpdateSkill};
use portfolio_backend::storage::{MemStorage, Storage, StorageError};

fn sample_skill(name: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        level: "Intermediate".to_string(),
        percentage: 50,
        icon: "code".to_string(),
        category: "Backend".to_string(),
    }
}

fn sample_biodata(name: &str) -> CreateBiodata {
    CreateBiodata {
        name: name.to_string(),
        title: "Developer".to_string(),
        bio: "Bio text".to_string(),
        email: "dev@example.com".to_string(),
        phone: "+1 555 0000".to_string(),
        location: "Remote".to_string(),
        profile_image: None,
    }
}

fn sample_article(title: &str, published: bool) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        excerpt: "Excerpt".to_string(),
        content: "Content".to_string(),
        category: "Engineering".to_string(),
        image: "/uploads/a.png".to_string(),
        date: "2025-01-01".to_string(),
        published,
    }
}

#[tokio::test]
async fn ids_are_unique_and_never_reused() {
    let store = MemStorage::new();

    let first = store.create_skill(sample_skill("Rust")).await.unwrap();
    let second = store.create_skill(sample_skill("Go")).await.unwrap();
    assert_ne!(first.id, second.id);
    assert!(second.id > first.id);

    // Deleting the latest row must not free its id for the next insert.
    assert!(store.delete_skill(second.id).await.unwrap());
    let third = store.create_skill(sample_skill("Zig")).await.unwrap();
    assert!(third.id > second.id);
}

#[tokio::test]
async fn partial_update_preserves_unmentioned_fields() {
    let store = MemStorage::new();
    let skill = store.create_skill(sample_skill("Go")).await.unwrap();

    let updated = store
        .update_skill(
            skill.id,
            UpdateSkill {
                percentage: Some(80),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.percentage, 80);
    assert_eq!(updated.name, "Go");
    assert_eq!(updated.level, "Intermediate");
    assert_eq!(updated.icon, "code");
    assert_eq!(updated.category, "Backend");
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let store = MemStorage::new();
    let err = store
        .update_skill(
            999,
            UpdateSkill {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound("Skill")));
}

#[tokio::test]
async fn biodata_upsert_keeps_a_single_row_and_its_id() {
    let store = MemStorage::new();
    assert!(store.get_biodata().await.unwrap().is_none());

    let first = store.update_biodata(sample_biodata("Alice")).await.unwrap();
    let second = store.update_biodata(sample_biodata("Bob")).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Bob");

    let current = store.get_biodata().await.unwrap().unwrap();
    assert_eq!(current.id, first.id);
    assert_eq!(current.name, "Bob");
}

#[tokio::test]
async fn contact_messages_are_stamped_server_side() {
    let store = MemStorage::new();
    let message = store
        .create_contact_message(CreateContactMessage {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            message: "Hello!".to_string(),
        })
        .await
        .unwrap();

    assert!(!message.date.is_empty());
    assert!(!message.read);

    assert!(store.mark_message_read(message.id).await.unwrap());
    let inbox = store.list_contact_messages().await.unwrap();
    assert!(inbox[0].read);

    // Marking a missing message reads as absent, not as an error.
    assert!(!store.mark_message_read(999).await.unwrap());
}

#[tokio::test]
async fn published_filter_hides_drafts() {
    let store = MemStorage::new();
    store.create_article(sample_article("One", true)).await.unwrap();
    store.create_article(sample_article("Two", false)).await.unwrap();
    store.create_article(sample_article("Three", true)).await.unwrap();

    let published = store.list_published_articles().await.unwrap();
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|a| a.published));

    let all = store.list_articles().await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let store = MemStorage::new();
    let skill = store.create_skill(sample_skill("Rust")).await.unwrap();

    assert!(store.delete_skill(skill.id).await.unwrap());
    assert!(!store.delete_skill(skill.id).await.unwrap());
    assert!(!store.delete_skill(999).await.unwrap());
}

#[tokio::test]
async fn get_by_id_distinguishes_present_from_absent() {
    let store = MemStorage::new();
    let skill = store.create_skill(sample_skill("Rust")).await.unwrap();

    let found = store.get_skill(skill.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Rust");

    // Absence is a None, not an error.
    assert!(store.get_skill(skill.id + 1).await.unwrap().is_none());
    assert!(store.get_project(1).await.unwrap().is_none());
}

#[tokio::test]
async fn lists_come_back_in_insertion_order() {
    let store = MemStorage::new();
    for name in ["First", "Second", "Third"] {
        store.create_skill(sample_skill(name)).await.unwrap();
    }

    let names: Vec<String> = store
        .list_skills()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn seed_admin_is_idempotent() {
    let store = MemStorage::new();
    store.seed_admin("admin", "hash-one").await.unwrap();
    store.seed_admin("admin", "hash-two").await.unwrap();

    let admin = store.get_user_by_username("admin").await.unwrap().unwrap();
    // The second seed must not overwrite the existing account.
    assert_eq!(admin.password_hash, "hash-one");
}
