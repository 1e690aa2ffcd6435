use super::todo_types::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoResponse, GetTodoResponse, ListTodosQuery,
    ListTodosResponse, TODO_DELETED_MESSAGE, ToggleTodoResponse, UpdateTodoRequest,
    UpdateTodoResponse,
};
use crate::{
    SharedTodoService,
    api::{ApiError, ApiResult, json_decode},
};
use ic_http_certification::{HttpRequest, HttpResponse};
use matchit::Params;
use todo_core::TodoId;

pub fn list_todos_handler(
    service: &SharedTodoService,
    req: &HttpRequest,
    _params: &Params,
) -> HttpResponse<'static> {
    log_request(req, "GET_ALL_TODOS");

    respond(|| {
        let filter = parse_query(req)?.into_filter();
        let todos = service.list(&filter)?;

        Ok(ListTodosResponse::ok_list(todos))
    })
}

pub fn get_todo_handler(
    service: &SharedTodoService,
    req: &HttpRequest,
    params: &Params,
) -> HttpResponse<'static> {
    log_request(req, "GET_TODO_BY_ID");

    respond(|| {
        let id = parse_todo_id(params)?;
        let todo = service.get_by_id(&id)?;

        Ok(GetTodoResponse::ok(todo))
    })
}

pub fn create_todo_handler(
    service: &SharedTodoService,
    req: &HttpRequest,
    _params: &Params,
) -> HttpResponse<'static> {
    log_request(req, "CREATE_TODO");

    respond(|| {
        let req_body: CreateTodoRequest = json_decode(req.body())?;
        let todo = service.create(req_body)?;

        tracing::info!(id = %todo.id, "Created todo");

        Ok(CreateTodoResponse::created(todo))
    })
}

pub fn update_todo_handler(
    service: &SharedTodoService,
    req: &HttpRequest,
    params: &Params,
) -> HttpResponse<'static> {
    log_request(req, "UPDATE_TODO");

    respond(|| {
        let id = parse_todo_id(params)?;
        let req_body: UpdateTodoRequest = json_decode(req.body())?;
        let todo = service.update(&id, req_body)?;

        Ok(UpdateTodoResponse::ok(todo))
    })
}

pub fn delete_todo_handler(
    service: &SharedTodoService,
    req: &HttpRequest,
    params: &Params,
) -> HttpResponse<'static> {
    log_request(req, "DELETE_TODO");

    respond(|| {
        let id = parse_todo_id(params)?;
        service.delete(&id)?;

        tracing::info!(%id, "Deleted todo");

        Ok(DeleteTodoResponse::ok_message(TODO_DELETED_MESSAGE))
    })
}

pub fn toggle_todo_handler(
    service: &SharedTodoService,
    req: &HttpRequest,
    params: &Params,
) -> HttpResponse<'static> {
    log_request(req, "TOGGLE_TODO_COMPLETE");

    respond(|| {
        let id = parse_todo_id(params)?;
        let todo = service.toggle_complete(&id)?;

        Ok(ToggleTodoResponse::ok(todo))
    })
}

fn respond(handler: impl FnOnce() -> ApiResult) -> HttpResponse<'static> {
    handler().unwrap_or_else(ApiError::into_response)
}

fn log_request(req: &HttpRequest, action: &str) {
    tracing::info!(method = %req.method(), url = req.url(), "{action}");
}

fn parse_todo_id(params: &Params) -> ApiResult<TodoId> {
    let id = params.get("id").unwrap_or_default();

    Ok(id.parse::<TodoId>()?)
}

fn parse_query(req: &HttpRequest) -> ApiResult<ListTodosQuery> {
    let query = req
        .get_query()
        .map_err(|err| ApiError::MalformedUrl(err.to_string()))?;

    match query {
        Some(query) => Ok(ListTodosQuery::from_pairs(serde_urlencoded::from_str(&query)?)),
        None => Ok(ListTodosQuery::default()),
    }
}
