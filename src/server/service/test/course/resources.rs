use super::*;

fn link(title: &str) -> AddResourceParams {
    AddResourceParams {
        title: title.to_string(),
        description: None,
        url: Some("https://example.com/slides.pdf".to_string()),
        file: None,
    }
}

/// Tests course materials of a course that is still pending review.
///
/// Expected: NotFound for anonymous readers and for a stranger adding a link, Ok for the
/// submitter
#[tokio::test]
async fn pending_course_resources_hidden() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_user(db).await?);
    let stranger = User::from_entity(factory::create_user(db).await?);
    let course = factory::course::CourseFactory::new(db, owner.id)
        .status("pending")
        .build()
        .await?;
    let service = CourseService::new(db);

    assert!(matches!(
        service.resources(course.id, None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.add_resource(course.id, &stranger, link("Slides")).await,
        Err(AppError::NotFound(_))
    ));

    service.add_resource(course.id, &owner, link("Slides")).await?;
    let resources = service.resources(course.id, Some(&owner)).await?;
    assert_eq!(resources.len(), 1);

    Ok(())
}

/// Tests course materials of an approved course.
///
/// Expected: anyone may list them
#[tokio::test]
async fn approved_course_resources_public() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_user(db).await?);
    let course = factory::create_course(db, owner.id).await?;
    let service = CourseService::new(db);

    service.add_resource(course.id, &owner, link("Syllabus")).await?;

    let resources = service.resources(course.id, None).await?;
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].title, "Syllabus");

    Ok(())
}
