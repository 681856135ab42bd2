//! Behavioural tests for the shared ownership, content, and listing
//! policies, driven end to end through the in-memory store adapters.

use std::sync::Arc;

use backend::config::SiteConfig;
use backend::domain::{
    Caller, CallerResponse, Comment, CommentForm, CommentId, CommentService, DisplayName, DomainError,
    News, NewsFeedService, NewsId, NoteForm, NoteService, User, UserId,
};
use backend::domain::moderation::{BAD_WORDS, WARNING};
use backend::domain::outcome::respond;
use backend::domain::ports::CommentRepository;
use backend::domain::slug::{SLUG_TAKEN_WARNING, slugify};
use backend::outbound::memory::{
    MemoryCommentRepository, MemoryNewsRepository, MemoryNoteRepository,
};
use backend::test_support::MutableClock;
use chrono::{Duration, NaiveDate};
use mockable::Clock;
use rstest::{fixture, rstest};

#[fixture]
fn config() -> SiteConfig {
    SiteConfig::new()
}

#[fixture]
fn author() -> User {
    User::new(
        UserId::random(),
        DisplayName::new("Автор").expect("valid display name"),
    )
}

#[fixture]
fn reader() -> User {
    User::new(
        UserId::random(),
        DisplayName::new("Не автор").expect("valid display name"),
    )
}

fn sample_news() -> News {
    News::new(
        NewsId::random(),
        "Заголовок",
        "Текст заметки",
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"),
    )
}

struct NewsWorld {
    comments: Arc<MemoryCommentRepository>,
    service: CommentService<MemoryCommentRepository, MemoryNewsRepository>,
    news: News,
}

// Given: a news site with one article and an empty comment store.
fn news_world() -> NewsWorld {
    let news = sample_news();
    let comments = Arc::new(MemoryCommentRepository::new());
    let service = CommentService::new(
        Arc::clone(&comments),
        Arc::new(MemoryNewsRepository::seeded(vec![news.clone()])),
        Arc::new(MutableClock::fixed()),
    );
    NewsWorld {
        comments,
        service,
        news,
    }
}

// When: an anonymous caller posts a valid comment.
async fn anonymous_posts(world: &NewsWorld) -> DomainError {
    world
        .service
        .submit(
            &Caller::Anonymous,
            world.news.id(),
            &CommentForm::new("Новый текст New"),
        )
        .await
        .expect_err("anonymous submission must be refused")
}

// Then: the caller is redirected to login and the comment count is unchanged.
fn redirected_and_unchanged(world: &NewsWorld, error: DomainError, config: &SiteConfig) {
    let detail_path = format!("/news/{}/", world.news.id());
    let response = respond(error, config.login_path(), &detail_path);
    let CallerResponse::LoginRedirect(redirect) = response else {
        panic!("expected a login redirect");
    };
    assert_eq!(
        redirect.location(),
        format!("{}?next={detail_path}", config.login_path())
    );
    assert_eq!(world.comments.len(), 0);
}

#[rstest]
#[tokio::test]
async fn anonymous_comment_submission_redirects_to_login(config: SiteConfig) {
    let world = news_world();
    let error = anonymous_posts(&world).await;
    redirected_and_unchanged(&world, error, &config);
}

#[rstest]
#[tokio::test]
async fn non_owner_comment_edit_looks_like_absence(
    config: SiteConfig,
    author: User,
    reader: User,
) {
    let world = news_world();
    let posted = world
        .service
        .submit(
            &Caller::Authenticated(author),
            world.news.id(),
            &CommentForm::new("Текст заметки"),
        )
        .await
        .expect("authenticated submission succeeds");

    let error = world
        .service
        .edit(
            &Caller::Authenticated(reader),
            posted.id(),
            &CommentForm::new("Новый текст New"),
        )
        .await
        .expect_err("non-owner edit must be refused");

    let edit_path = format!("/news/edit/{}/", posted.id());
    assert_eq!(
        respond(error, config.login_path(), &edit_path),
        CallerResponse::NotFound
    );

    let stored = world
        .comments
        .find_by_id(posted.id())
        .await
        .expect("lookup succeeds")
        .expect("comment is still stored");
    assert_eq!(stored.text(), "Текст заметки");
    assert_eq!(stored.created_at(), posted.created_at());
}

#[rstest]
#[tokio::test]
async fn banned_words_never_reach_the_store(author: User) {
    let world = news_world();
    let caller = Caller::Authenticated(author);

    for word in BAD_WORDS {
        let error = world
            .service
            .submit(
                &caller,
                world.news.id(),
                &CommentForm::new(format!("Какой-то текст, {word}, еще текст")),
            )
            .await
            .expect_err("banned words must be refused");
        let DomainError::Rejected(errors) = error else {
            panic!("expected a form rejection");
        };
        assert_eq!(errors.messages_for("text").collect::<Vec<_>>(), [WARNING]);
    }
    assert_eq!(world.comments.len(), 0);
}

#[rstest]
#[tokio::test]
async fn a_note_without_a_slug_stores_the_derived_one(author: User) {
    let notes = NoteService::new(Arc::new(MemoryNoteRepository::new()));

    let note = notes
        .create(
            &Caller::Authenticated(author),
            &NoteForm::new("Заголовок5", "Текст5"),
        )
        .await
        .expect("creation succeeds");

    assert_eq!(note.slug(), slugify("Заголовок5"));
}

#[rstest]
#[tokio::test]
async fn a_duplicate_slug_is_rejected_with_the_attempted_value(author: User) {
    let repo = Arc::new(MemoryNoteRepository::new());
    let notes = NoteService::new(Arc::clone(&repo));
    let caller = Caller::Authenticated(author);
    let form = NoteForm::new("Заголовок5", "Текст5").with_slug("slug");

    notes
        .create(&caller, &form)
        .await
        .expect("first creation succeeds");
    let error = notes
        .create(&caller, &form)
        .await
        .expect_err("duplicate slug must be refused");

    let DomainError::Rejected(errors) = error else {
        panic!("expected a form rejection");
    };
    assert_eq!(
        errors.messages_for("slug").collect::<Vec<_>>(),
        [format!("slug{SLUG_TAKEN_WARNING}").as_str()]
    );
    assert_eq!(repo.len(), 1);
}

#[rstest]
#[tokio::test]
async fn the_front_page_is_capped_and_freshest_first(config: SiteConfig) {
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
    let cap = config.news_count_on_home_page();
    let items: Vec<News> = (0..cap + 2)
        .map(|element| {
            News::new(
                NewsId::random(),
                format!("Заголовок{element}"),
                format!("Текст заметки{element}"),
                today - Duration::days(i64::try_from(element).expect("small offset")),
            )
        })
        .collect();
    let feed = NewsFeedService::new(
        Arc::new(MemoryNewsRepository::seeded(items)),
        Arc::new(MemoryCommentRepository::new()),
        cap,
    );

    let page = feed.front_page().await.expect("front page succeeds");
    assert_eq!(page.len(), cap);
    for pair in page.windows(2) {
        let [fresher, older] = pair else {
            panic!("windows(2) yields pairs");
        };
        assert!(fresher.date() >= older.date());
    }
}

#[rstest]
#[tokio::test]
async fn comments_display_in_insertion_order_when_created_in_order(author: User) {
    let news = sample_news();
    let clock = MutableClock::fixed();
    let rows: Vec<Comment> = (0..10)
        .map(|index| {
            clock.advance_days(1);
            Comment::new(
                CommentId::random(),
                news.id(),
                author.id(),
                format!("Текст заметки{index}"),
                clock.utc(),
            )
        })
        .collect();
    let feed = NewsFeedService::new(
        Arc::new(MemoryNewsRepository::seeded(vec![news.clone()])),
        Arc::new(MemoryCommentRepository::seeded(rows.clone())),
        SiteConfig::new().news_count_on_home_page(),
    );

    let detail = feed.detail(news.id()).await.expect("detail succeeds");
    let shown: Vec<_> = detail.comments.iter().map(Comment::id).collect();
    let inserted: Vec<_> = rows.iter().map(Comment::id).collect();
    assert_eq!(shown, inserted);
}
