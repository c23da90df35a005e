use super::*;

/// Tests adding resources and finding uploads.
///
/// Verifies uploads are found only under their own course, url resources are not
/// downloadable, and uploaders become contributors.
///
/// Expected: find_upload returns the upload and nothing else
#[tokio::test]
async fn finds_only_uploads_of_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let uploader = factory::create_user(db).await?;
    let course = factory::create_course(db, owner.id).await?;
    let other = factory::create_course(db, owner.id).await?;
    let repo = CourseRepository::new(db);

    let upload = repo
        .add_resource(NewCourseResource {
            course_id: course.id,
            kind: RESOURCE_KIND_UPLOAD,
            title: "Textbook".to_string(),
            description: None,
            url: "/uploads/files/book.pdf".to_string(),
            uploader_id: uploader.id,
        })
        .await?;
    let link = repo
        .add_resource(NewCourseResource {
            course_id: course.id,
            kind: RESOURCE_KIND_URL,
            title: "Slides".to_string(),
            description: Some("week 1".to_string()),
            url: "https://example.com".to_string(),
            uploader_id: owner.id,
        })
        .await?;

    assert_eq!(repo.resources(course.id).await?.len(), 2);
    assert_eq!(
        repo.find_upload(course.id, upload.id).await?.map(|r| r.id),
        Some(upload.id)
    );
    assert!(repo.find_upload(course.id, link.id).await?.is_none());
    assert!(repo.find_upload(other.id, upload.id).await?.is_none());

    let detail = repo.find_with_relations(course.id).await?.unwrap();
    let contributor_ids: Vec<i32> = detail.contributors.iter().map(|u| u.id).collect();
    assert_eq!(contributor_ids, vec![owner.id, uploader.id]);

    Ok(())
}
