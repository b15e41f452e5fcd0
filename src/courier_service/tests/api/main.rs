mod helpers;
mod send_job;
