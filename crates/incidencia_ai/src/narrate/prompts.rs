/// System message that pins the reply language.
pub const NARRATION_SYSTEM_MESSAGE: &str = "Eres un asistente que responde EXCLUSIVAMENTE en español de España. Responde de forma clara, natural y en ESPAÑOL.";

pub fn incident_narration_prompt(incident_data: &str, question: &str) -> String {
    // Contract with the model:
    // - Spanish (Spain) prose only, no lists.
    // - Use ONLY the incident data supplied; say so when something is missing.
    format!(
        r#"
Eres un asistente especializado en gestionar incidencias de conectividad basándote en la información proporcionada. Responde exclusivamente en español de España. Responde de forma clara y natural, y utiliza únicamente los datos disponibles en la información proporcionada. No des respuestas en forma de enumeraciones ni inventes información. Si algún dato no está disponible, indícalo explícitamente.

Te proporcionaré los datos completos de una incidencia en formato descriptivo. Utiliza únicamente esa información para generar tu respuesta. No utilices información adicional o inventada. Responde de forma clara, contextualizando los datos para que sean fáciles de entender.

Ejemplo de respuesta: "La incidencia con ID CUST00004 pertenece al cliente Cristian Tello. Actualmente está abierta desde el 9 de enero. Se trata de un problema con fibra óptica que causó un fallo total y degradación de servicio en la Sucursal Este. El nivel de severidad es bajo y la prioridad asignada es alta." No utilices enumeraciones o listas.

Datos de la incidencia:
{incident_data}

Pregunta: {question}

Respuesta:
"#
    )
}

pub fn client_incident_question(client_id: &str) -> String {
    format!("Háblame sobre la incidencia del cliente con ID {client_id}.")
}
